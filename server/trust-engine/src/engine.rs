//! Core engine: folds the rule chain over the base score and assembles the
//! decision. Stateless across calls; total over any well-typed input.

use crate::config::Config;
use crate::rules;
use crate::types::{Band, Input, Output};

pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Evaluate one entity. Missing attributes skip their rules; an empty
  /// attribute mapping yields the unmodified base score.
  pub fn evaluate(&self, input: &Input) -> Output {
    let mut score = self.config.base_score;
    let mut reasons = Vec::new();

    for rule in rules::chain() {
      let (next, reason) = rule(score, &input.attributes, &input.context, &self.config);
      score = next;
      if let Some(r) = reason {
        reasons.push(r);
      }
    }

    // Confidence is independent of the score computation.
    let confidence = (input.meta.completeness + input.meta.source_confidence) / 2.0;

    // Round only at the output boundary. The band is derived from the rounded
    // score so that the reported score and band never disagree.
    let rounded = round2(score);
    Output {
      entity_id: input.entity_id.clone(),
      score: rounded,
      band: self.band(rounded),
      confidence: round2(confidence),
      reasons,
    }
  }

  /// Band thresholds are boundary-inclusive on the lower bound.
  fn band(&self, score: f64) -> Band {
    if score < self.config.low_band_below {
      Band::Low
    } else if score < self.config.moderate_band_below {
      Band::Moderate
    } else {
      Band::High
    }
  }
}

fn round2(v: f64) -> f64 {
  (v * 100.0).round() / 100.0
}
