//! Structured error types for the signal pipeline.

use thiserror::Error;

/// Failure inside a single extractor. Per-file read problems are handled
/// locally by the structure extractor and never reach this type.
#[derive(Debug, Error)]
pub enum ExtractorError {
  #[error("git: {0}")]
  Git(#[from] git2::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

/// Failure of a pipeline run. Always names the signal that failed; there are
/// no partial results (fail-fast).
#[derive(Debug, Error)]
pub enum PipelineError {
  #[error("extractor '{name}' failed: {source}")]
  Extractor {
    name: &'static str,
    source: ExtractorError,
  },
}

impl PipelineError {
  pub fn extractor(name: &'static str, source: ExtractorError) -> Self {
    Self::Extractor { name, source }
  }
}
