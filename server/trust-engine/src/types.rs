//! Core types for the trust engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config;

// ---------------------------------------------------------------------------
// Attribute mapping (the only channel between signal extractors and us)
// ---------------------------------------------------------------------------

/// One signal value: integer count, real score, or null (signal computed but
/// undefined, e.g. average commit gap with fewer than two commits).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
  Int(i64),
  Num(f64),
  Null,
}

impl SignalValue {
  /// Numeric view. `Null` reads as absent, so rules skip it.
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Self::Int(v) => Some(*v as f64),
      Self::Num(v) => Some(*v),
      Self::Null => None,
    }
  }
}

/// Signal name -> value. BTreeMap for deterministic JSON output.
pub type Attributes = BTreeMap<String, SignalValue>;

/// Numeric attribute lookup used by every rule: absent key and null value are
/// the same thing (the rule does not fire).
pub fn numeric(attributes: &Attributes, key: &str) -> Option<f64> {
  attributes.get(key).and_then(SignalValue::as_f64)
}

// ---------------------------------------------------------------------------
// Context + meta
// ---------------------------------------------------------------------------

/// Situational priority. Scales each rule's effect via per-rule factors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  #[default]
  Medium,
  High,
}

/// Situational modifiers for one evaluation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Context {
  #[serde(default)]
  pub priority_level: Priority,
}

/// Confidence inputs, independent of the score computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Meta {
  #[serde(default = "default_completeness")]
  pub completeness: f64,
  #[serde(default = "default_source_confidence")]
  pub source_confidence: f64,
}

fn default_completeness() -> f64 {
  config::DEFAULT_COMPLETENESS
}

fn default_source_confidence() -> f64 {
  config::DEFAULT_SOURCE_CONFIDENCE
}

impl Default for Meta {
  fn default() -> Self {
    Self {
      completeness: default_completeness(),
      source_confidence: default_source_confidence(),
    }
  }
}

// ---------------------------------------------------------------------------
// Inbound type (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One evaluation request. Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Input {
  #[serde(default)]
  pub entity_id: String,
  #[serde(default)]
  pub attributes: Attributes,
  #[serde(default)]
  pub context: Context,
  #[serde(default)]
  pub meta: Meta,
}

// ---------------------------------------------------------------------------
// Outbound types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Categorical bucket derived from the rounded final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
  Low,
  Moderate,
  High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Positive,
  Negative,
}

/// Stable tag identifying which rule produced a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
  DelayHistory,
  Inconsistency,
  Reliability,
}

/// One audit entry: which rule fired, which way, and by how much (signed,
/// 3 decimals). Immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reason {
  pub code: ReasonCode,
  pub direction: Direction,
  pub impact: f64,
}

/// Final decision for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub entity_id: String,
  pub score: f64,
  pub band: Band,
  pub confidence: f64,
  pub reasons: Vec<Reason>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn signal_value_untagged_json() {
    let attrs: Attributes = serde_json::from_str(
      r#"{"commit_count": 7, "avg_gap_hours": null, "reliability_score": 0.8}"#,
    )
    .unwrap();
    assert_eq!(attrs["commit_count"], SignalValue::Int(7));
    assert_eq!(attrs["avg_gap_hours"], SignalValue::Null);
    assert_eq!(attrs["reliability_score"], SignalValue::Num(0.8));
  }

  #[test]
  fn null_reads_as_absent() {
    let mut attrs = Attributes::new();
    attrs.insert("avg_gap_hours".into(), SignalValue::Null);
    assert_eq!(numeric(&attrs, "avg_gap_hours"), None);
    assert_eq!(numeric(&attrs, "missing"), None);
  }

  #[test]
  fn context_and_meta_default_when_absent() {
    let input: Input = serde_json::from_str(r#"{"entity_id": "e1"}"#).unwrap();
    assert_eq!(input.context.priority_level, Priority::Medium);
    assert_eq!(input.meta.completeness, 1.0);
    assert_eq!(input.meta.source_confidence, 1.0);
    assert!(input.attributes.is_empty());
  }

  #[test]
  fn reason_code_serializes_screaming_snake() {
    let json = serde_json::to_string(&ReasonCode::DelayHistory).unwrap();
    assert_eq!(json, r#""DELAY_HISTORY""#);
  }
}
