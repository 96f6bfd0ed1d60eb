//! Repo Signal Pipeline — deterministic signal extraction (V1).
//!
//! Given a local path to a repository checkout at a stable revision, runs a
//! fixed, ordered set of signal extractors (commit evolution, code structure)
//! and merges their outputs into one flat attribute mapping for the trust
//! engine. Read-only; no DB, no network, no state across runs.

pub mod error;
pub mod evolution;
pub mod extractor;
pub mod pipeline;
pub mod structure;
pub mod types;

pub use error::{ExtractorError, PipelineError};
pub use extractor::SignalExtractor;
pub use pipeline::SignalPipeline;
pub use types::{Attributes, PipelineOutput, SignalValue};
