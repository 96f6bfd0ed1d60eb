//! The extractor seam: anything that turns a repository checkout into a
//! named-value mapping.

use std::path::Path;

use crate::error::ExtractorError;
use crate::evolution::CommitEvolutionExtractor;
use crate::structure::CodeStructureExtractor;
use crate::types::Attributes;

/// A signal source. Implementations are pure readers: they never mutate the
/// checkout and hold no state across calls.
pub trait SignalExtractor {
  /// Stable name used in error reporting ("which signal failed").
  fn name(&self) -> &'static str;

  /// Extract this source's attributes from the repository at `repo`.
  fn extract(&self, repo: &Path) -> Result<Attributes, ExtractorError>;
}

/// The default extractor registry, in its fixed execution order.
///
/// Order is a contract: the pipeline merges outputs left to right, and later
/// extractors overwrite earlier ones on key collision.
pub fn default_extractors() -> Vec<Box<dyn SignalExtractor>> {
  vec![
    Box::new(CommitEvolutionExtractor::new()),
    Box::new(CodeStructureExtractor::new()),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_order_is_evolution_then_structure() {
    let extractors = default_extractors();
    let names: Vec<_> = extractors.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["commit_evolution", "code_structure"]);
  }
}
