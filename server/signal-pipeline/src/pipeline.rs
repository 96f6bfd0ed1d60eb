//! The aggregator: runs every registered extractor over one checkout and
//! merges their outputs into a single flat attribute mapping.

use std::path::Path;

use crate::error::PipelineError;
use crate::extractor::{default_extractors, SignalExtractor};
use crate::types::PipelineOutput;

/// An ordered set of signal extractors. Stateless across runs.
pub struct SignalPipeline {
  extractors: Vec<Box<dyn SignalExtractor>>,
}

impl SignalPipeline {
  pub fn new(extractors: Vec<Box<dyn SignalExtractor>>) -> Self {
    Self { extractors }
  }

  pub fn with_defaults() -> Self {
    Self::new(default_extractors())
  }

  /// Run every extractor in registration order and merge by key; later
  /// extractors overwrite earlier ones on collision.
  ///
  /// Fail-fast: the first extractor error aborts the run with no partial
  /// results, naming the signal that failed.
  pub fn run(&self, repo_path: &Path) -> Result<PipelineOutput, PipelineError> {
    let mut output = PipelineOutput::default();

    for extractor in &self.extractors {
      let attributes = extractor
        .extract(repo_path)
        .map_err(|e| PipelineError::extractor(extractor.name(), e))?;
      output.attributes.extend(attributes);
    }

    Ok(output)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ExtractorError;
  use crate::types::{Attributes, SignalValue};
  use std::io;

  struct StubExtractor {
    name: &'static str,
    pairs: Vec<(&'static str, f64)>,
  }

  impl SignalExtractor for StubExtractor {
    fn name(&self) -> &'static str {
      self.name
    }

    fn extract(&self, _repo: &Path) -> Result<Attributes, ExtractorError> {
      Ok(
        self
          .pairs
          .iter()
          .map(|(k, v)| (k.to_string(), SignalValue::Num(*v)))
          .collect(),
      )
    }
  }

  struct FailingExtractor;

  impl SignalExtractor for FailingExtractor {
    fn name(&self) -> &'static str {
      "failing"
    }

    fn extract(&self, _repo: &Path) -> Result<Attributes, ExtractorError> {
      Err(ExtractorError::Io(io::Error::new(
        io::ErrorKind::PermissionDenied,
        "metadata unreadable",
      )))
    }
  }

  #[test]
  fn merges_extractor_outputs() {
    let pipeline = SignalPipeline::new(vec![
      Box::new(StubExtractor {
        name: "a",
        pairs: vec![("x", 1.0)],
      }),
      Box::new(StubExtractor {
        name: "b",
        pairs: vec![("y", 2.0)],
      }),
    ]);

    let out = pipeline.run(Path::new("unused")).unwrap();
    assert_eq!(out.attributes.len(), 2);
    assert!(out.meta.is_empty());
  }

  #[test]
  fn later_extractor_wins_key_collisions() {
    let pipeline = SignalPipeline::new(vec![
      Box::new(StubExtractor {
        name: "first",
        pairs: vec![("shared", 1.0), ("only_first", 5.0)],
      }),
      Box::new(StubExtractor {
        name: "second",
        pairs: vec![("shared", 9.0)],
      }),
    ]);

    let out = pipeline.run(Path::new("unused")).unwrap();
    assert_eq!(out.attributes["shared"], SignalValue::Num(9.0));
    assert_eq!(out.attributes["only_first"], SignalValue::Num(5.0));
  }

  #[test]
  fn extractor_failure_aborts_and_names_the_signal() {
    let pipeline = SignalPipeline::new(vec![
      Box::new(StubExtractor {
        name: "ok",
        pairs: vec![("x", 1.0)],
      }),
      Box::new(FailingExtractor),
    ]);

    let err = pipeline.run(Path::new("unused")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failing"), "error must name the signal: {}", msg);
    assert!(msg.contains("metadata unreadable"));
  }
}
