//! Core types for the signal pipeline (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Attribute mapping (the pipeline's output vocabulary)
// ---------------------------------------------------------------------------

/// One extracted signal value. Null marks a signal that was computed but is
/// undefined for this repository (e.g. average gap with fewer than 2 commits).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
  Int(i64),
  Num(f64),
  Null,
}

impl From<i64> for SignalValue {
  fn from(v: i64) -> Self {
    Self::Int(v)
  }
}

impl From<f64> for SignalValue {
  fn from(v: f64) -> Self {
    Self::Num(v)
  }
}

impl From<Option<f64>> for SignalValue {
  fn from(v: Option<f64>) -> Self {
    match v {
      Some(v) => Self::Num(v),
      None => Self::Null,
    }
  }
}

/// Signal name -> value. BTreeMap for deterministic JSON output.
pub type Attributes = BTreeMap<String, SignalValue>;

/// Merged pipeline result: the flat attribute mapping plus pipeline-level
/// meta (currently always empty — reserved for extractor diagnostics).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineOutput {
  pub attributes: Attributes,
  pub meta: BTreeMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// One inbound job line from stdin. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundJob {
  /// Local path to a repository checkout at a stable revision.
  pub repo_path: String,
  #[serde(default)]
  pub entity_id: Option<String>,
}

/// One outbound result line: the pipeline output with the job's entity echo.
#[derive(Debug, Clone, Serialize)]
pub struct JobOutput {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub entity_id: Option<String>,
  pub attributes: Attributes,
  pub meta: BTreeMap<String, serde_json::Value>,
}

impl JobOutput {
  pub fn new(entity_id: Option<String>, output: PipelineOutput) -> Self {
    Self {
      entity_id,
      attributes: output.attributes,
      meta: output.meta,
    }
  }
}

/// Structured error output for failed jobs or invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub entity_id: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      entity_id: None,
    }
  }

  pub fn with_entity(mut self, entity_id: Option<String>) -> Self {
    self.entity_id = entity_id;
    self
  }
}
