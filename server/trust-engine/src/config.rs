//! Engine configuration with sane defaults.
//!
//! Every constant here is load-bearing: the monotonicity and banding
//! guarantees of the engine are stated in terms of these exact values.

use crate::types::Priority;

/// Meta defaults when the caller omits confidence inputs.
pub const DEFAULT_COMPLETENESS: f64 = 1.0;
pub const DEFAULT_SOURCE_CONFIDENCE: f64 = 1.0;

/// Priority multipliers for one rule (medium is always 1.0).
#[derive(Debug, Clone, Copy)]
pub struct PriorityFactors {
  pub high: f64,
  pub low: f64,
}

impl PriorityFactors {
  pub fn factor(&self, priority: Priority) -> f64 {
    match priority {
      Priority::High => self.high,
      Priority::Low => self.low,
      Priority::Medium => 1.0,
    }
  }
}

/// Tunable weights and thresholds for the decision engine.
#[derive(Debug, Clone)]
pub struct Config {
  /// Starting score before any rule applies.
  pub base_score: f64,
  /// Per-unit penalty for delay_frequency.
  pub delay_frequency_weight: f64,
  /// Per-unit penalty for delay_severity.
  pub delay_severity_weight: f64,
  /// Priority scaling for the delay-history rule.
  pub delay_priority: PriorityFactors,
  /// Per-unit penalty for inconsistency_score.
  pub inconsistency_weight: f64,
  /// Priority scaling for the inconsistency rule.
  pub inconsistency_priority: PriorityFactors,
  /// Per-unit boost for reliability_score.
  pub reliability_weight: f64,
  /// Priority scaling for the reliability rule.
  pub reliability_priority: PriorityFactors,
  /// Rounded scores below this band as "low".
  pub low_band_below: f64,
  /// Rounded scores below this (and >= low_band_below) band as "moderate";
  /// everything at or above bands as "high".
  pub moderate_band_below: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_score: 0.5,
      delay_frequency_weight: 0.1,
      delay_severity_weight: 0.1,
      delay_priority: PriorityFactors {
        high: 1.2,
        low: 0.8,
      },
      inconsistency_weight: 0.15,
      inconsistency_priority: PriorityFactors {
        high: 1.25,
        low: 0.9,
      },
      reliability_weight: 0.12,
      reliability_priority: PriorityFactors {
        high: 1.15,
        low: 0.9,
      },
      low_band_below: 0.4,
      moderate_band_below: 0.7,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Priority;

  #[test]
  fn medium_factor_is_always_one() {
    let f = PriorityFactors {
      high: 1.2,
      low: 0.8,
    };
    assert_eq!(f.factor(Priority::Medium), 1.0);
    assert_eq!(f.factor(Priority::High), 1.2);
    assert_eq!(f.factor(Priority::Low), 0.8);
  }
}
