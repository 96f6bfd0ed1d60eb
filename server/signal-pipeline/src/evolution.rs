//! Commit evolution signals: cadence and a coarse reliability tier from the
//! repository's commit history (libgit2 revwalk).

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use git2::{ErrorCode, Repository};

use crate::error::ExtractorError;
use crate::extractor::SignalExtractor;
use crate::types::{Attributes, SignalValue};

/// Commit counts at or above these thresholds earn the paired reliability
/// tier; anything below the last threshold gets the floor value.
///
/// Pre-MVP heuristic, not a fitted model. The exact tiers are part of the
/// signal contract; recalibrate deliberately, never in passing.
const RELIABILITY_TIERS: [(usize, f64); 2] = [(5, 0.8), (3, 0.6)];
const RELIABILITY_FLOOR: f64 = 0.3;

/// Extracts `commit_count`, `avg_gap_hours`, and `reliability_score`.
#[derive(Debug, Default)]
pub struct CommitEvolutionExtractor;

impl CommitEvolutionExtractor {
  pub fn new() -> Self {
    Self
  }
}

impl SignalExtractor for CommitEvolutionExtractor {
  fn name(&self) -> &'static str {
    "commit_evolution"
  }

  fn extract(&self, repo: &Path) -> Result<Attributes, ExtractorError> {
    let mut times = collect_commit_times(repo)?;
    times.sort();

    let mut attributes = Attributes::new();
    attributes.insert("commit_count".into(), SignalValue::from(times.len() as i64));
    attributes.insert("avg_gap_hours".into(), SignalValue::from(average_gap_hours(&times)));
    attributes.insert(
      "reliability_score".into(),
      SignalValue::from(reliability_score(times.len())),
    );
    Ok(attributes)
  }
}

/// Commit times (committer clock) reachable from HEAD, in revwalk order.
/// A repository without any commit yields an empty vector, not an error.
pub fn collect_commit_times(repo_path: &Path) -> Result<Vec<DateTime<Utc>>, ExtractorError> {
  let repo = Repository::open(repo_path)?;

  match repo.head() {
    Ok(_) => {}
    Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
      return Ok(Vec::new());
    }
    Err(e) => return Err(e.into()),
  }

  let mut revwalk = repo.revwalk()?;
  revwalk.push_head()?;

  let mut times = Vec::new();
  for oid in revwalk {
    let commit = repo.find_commit(oid?)?;
    if let Some(t) = Utc.timestamp_opt(commit.time().seconds(), 0).single() {
      times.push(t);
    }
  }
  Ok(times)
}

/// Mean gap between consecutive commits, in hours. Undefined (None) below
/// two commits. Expects ascending input.
pub fn average_gap_hours(sorted_times: &[DateTime<Utc>]) -> Option<f64> {
  if sorted_times.len() < 2 {
    return None;
  }
  let total_secs: i64 = sorted_times
    .windows(2)
    .map(|w| (w[1] - w[0]).num_seconds())
    .sum();
  let gap_count = (sorted_times.len() - 1) as f64;
  Some(total_secs as f64 / 3600.0 / gap_count)
}

/// Three-tier step function of commit count.
pub fn reliability_score(commit_count: usize) -> f64 {
  if commit_count == 0 {
    return 0.0;
  }
  for (threshold, score) in RELIABILITY_TIERS {
    if commit_count >= threshold {
      return score;
    }
  }
  RELIABILITY_FLOOR
}
