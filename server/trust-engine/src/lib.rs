//! Repo Trust Decision Engine — deterministic, rule-based (V1).
//!
//! Consumes a flat attribute mapping produced by the signal pipeline, applies
//! a fixed, ordered chain of priority-weighted adjustment rules to a base
//! score, and emits a score, a band, a confidence value, and an ordered audit
//! trail of reasons.
//!
//! No AI, no DB, no network; pure computation.

pub mod config;
pub mod engine;
pub mod rules;
pub mod types;

pub use config::Config;
pub use engine::Engine;
pub use types::{Band, Input, Output, Reason};

/// Evaluate one entity with the default configuration (no I/O).
pub fn evaluate(input: &types::Input) -> types::Output {
  Engine::with_defaults().evaluate(input)
}
