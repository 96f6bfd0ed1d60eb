//! The ordered adjustment rule chain.
//!
//! Each rule is a pure function `(score, attributes, context, config) ->
//! (score, Option<Reason>)`. The application order is a contract: each rule
//! clamps its own output into [0, 1], so reordering changes results. A rule
//! whose triggering attributes are absent (or null) returns the score
//! untouched and appends no reason.

use crate::config::Config;
use crate::types::{numeric, Attributes, Context, Direction, Reason, ReasonCode};

pub type Rule = fn(f64, &Attributes, &Context, &Config) -> (f64, Option<Reason>);

/// Fixed evaluation order: delay history, inconsistency, reliability.
pub fn chain() -> [Rule; 3] {
  [delay_history, inconsistency, reliability]
}

/// Round a signed impact to 3 decimals for the audit trail.
fn round3(v: f64) -> f64 {
  (v * 1000.0).round() / 1000.0
}

/// Negative: past delivery delays. Fires if either delay attribute is present;
/// an absent term contributes nothing.
fn delay_history(
  score: f64,
  attributes: &Attributes,
  context: &Context,
  config: &Config,
) -> (f64, Option<Reason>) {
  let frequency = numeric(attributes, "delay_frequency");
  let severity = numeric(attributes, "delay_severity");

  if frequency.is_none() && severity.is_none() {
    return (score, None);
  }

  let mut penalty = 0.0;
  if let Some(f) = frequency {
    penalty += f * config.delay_frequency_weight;
  }
  if let Some(s) = severity {
    penalty += s * config.delay_severity_weight;
  }
  penalty *= config.delay_priority.factor(context.priority_level);

  let reason = Reason {
    code: ReasonCode::DelayHistory,
    direction: Direction::Negative,
    impact: round3(-penalty),
  };
  ((score - penalty).max(0.0), Some(reason))
}

/// Negative: structural inconsistency of the codebase.
fn inconsistency(
  score: f64,
  attributes: &Attributes,
  context: &Context,
  config: &Config,
) -> (f64, Option<Reason>) {
  let value = match numeric(attributes, "inconsistency_score") {
    Some(v) => v,
    None => return (score, None),
  };

  let penalty = value
    * config.inconsistency_weight
    * config.inconsistency_priority.factor(context.priority_level);

  let reason = Reason {
    code: ReasonCode::Inconsistency,
    direction: Direction::Negative,
    impact: round3(-penalty),
  };
  ((score - penalty).max(0.0), Some(reason))
}

/// Positive: commit-history reliability.
fn reliability(
  score: f64,
  attributes: &Attributes,
  context: &Context,
  config: &Config,
) -> (f64, Option<Reason>) {
  let value = match numeric(attributes, "reliability_score") {
    Some(v) => v,
    None => return (score, None),
  };

  let boost = value
    * config.reliability_weight
    * config.reliability_priority.factor(context.priority_level);

  let reason = Reason {
    code: ReasonCode::Reliability,
    direction: Direction::Positive,
    impact: round3(boost),
  };
  ((score + boost).min(1.0), Some(reason))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Priority, SignalValue};

  fn attrs(pairs: &[(&str, f64)]) -> Attributes {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), SignalValue::Num(*v)))
      .collect()
  }

  fn ctx(priority: Priority) -> Context {
    Context {
      priority_level: priority,
    }
  }

  #[test]
  fn delay_skips_when_both_attributes_absent() {
    let config = Config::default();
    let (score, reason) = delay_history(0.5, &Attributes::new(), &ctx(Priority::Medium), &config);
    assert_eq!(score, 0.5);
    assert!(reason.is_none());
  }

  #[test]
  fn delay_fires_with_single_attribute() {
    let config = Config::default();
    let a = attrs(&[("delay_frequency", 0.5)]);
    let (score, reason) = delay_history(0.5, &a, &ctx(Priority::Medium), &config);
    assert!((score - 0.45).abs() < 1e-12);
    let reason = reason.unwrap();
    assert_eq!(reason.code, ReasonCode::DelayHistory);
    assert_eq!(reason.direction, Direction::Negative);
    assert_eq!(reason.impact, -0.05);
  }

  #[test]
  fn delay_priority_scaling() {
    let config = Config::default();
    let a = attrs(&[("delay_frequency", 0.6), ("delay_severity", 0.4)]);
    let (high, _) = delay_history(0.5, &a, &ctx(Priority::High), &config);
    let (medium, _) = delay_history(0.5, &a, &ctx(Priority::Medium), &config);
    let (low, _) = delay_history(0.5, &a, &ctx(Priority::Low), &config);
    // 0.1 base penalty scaled by 1.2 / 1.0 / 0.8.
    assert!((high - 0.38).abs() < 1e-12);
    assert!((medium - 0.40).abs() < 1e-12);
    assert!((low - 0.42).abs() < 1e-12);
  }

  #[test]
  fn delay_floors_at_zero() {
    let config = Config::default();
    let a = attrs(&[("delay_frequency", 10.0), ("delay_severity", 10.0)]);
    let (score, reason) = delay_history(0.1, &a, &ctx(Priority::High), &config);
    assert_eq!(score, 0.0);
    // Reason records the full penalty even when the floor truncates it.
    assert!(reason.unwrap().impact < -0.1);
  }

  #[test]
  fn inconsistency_penalty_and_reason() {
    let config = Config::default();
    let a = attrs(&[("inconsistency_score", 0.5)]);
    let (score, reason) = inconsistency(0.5, &a, &ctx(Priority::High), &config);
    // 0.5 * 0.15 * 1.25 = 0.09375
    assert!((score - 0.40625).abs() < 1e-12);
    assert_eq!(reason.unwrap().impact, -0.094);
  }

  #[test]
  fn reliability_caps_at_one() {
    let config = Config::default();
    let a = attrs(&[("reliability_score", 1.0)]);
    let (score, reason) = reliability(0.95, &a, &ctx(Priority::High), &config);
    assert_eq!(score, 1.0);
    let reason = reason.unwrap();
    assert_eq!(reason.direction, Direction::Positive);
    assert_eq!(reason.impact, 0.138);
  }

  #[test]
  fn null_attribute_does_not_fire() {
    let config = Config::default();
    let mut a = Attributes::new();
    a.insert("inconsistency_score".into(), SignalValue::Null);
    let (score, reason) = inconsistency(0.5, &a, &ctx(Priority::Medium), &config);
    assert_eq!(score, 0.5);
    assert!(reason.is_none());
  }
}
