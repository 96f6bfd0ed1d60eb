//! Code structure signals: a single `inconsistency_score` derived from the
//! distribution of per-file line counts (dominance + Gini inequality +
//! file-count deficiency).

use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::ExtractorError;
use crate::extractor::SignalExtractor;
use crate::types::{Attributes, SignalValue};

/// Source file extensions we sample (case-insensitive).
const SOURCE_EXTENSIONS: [&str; 10] = [
  "py", "js", "ts", "java", "cpp", "c", "cs", "go", "rs", "php",
];

/// A single file must exceed this share of total lines before dominance
/// contributes at all...
const DOMINANCE_ONSET: f64 = 0.35;
/// ...scaling linearly to 1.0 over this span (full dominance at 85%+).
const DOMINANCE_SPAN: f64 = 0.5;

/// Sub-score weights in the combined inconsistency score.
const DOMINANCE_WEIGHT: f64 = 0.5;
const GINI_WEIGHT: f64 = 0.3;
const DEFICIENCY_WEIGHT: f64 = 0.2;

/// Diagnostic breakdown of one structure scan. The extractor only publishes
/// `inconsistency_score`; callers wanting the sub-scores use `scan` directly.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct StructureReport {
  pub inconsistency_score: f64,
  pub total_lines: u64,
  pub file_count: usize,
  pub largest_ratio: f64,
  pub dominance: f64,
  pub gini: f64,
  pub deficiency: f64,
  pub expected_files: f64,
}

impl StructureReport {
  /// The defined result for a repository with no qualifying source files.
  fn empty() -> Self {
    Self {
      inconsistency_score: 0.0,
      total_lines: 0,
      file_count: 0,
      largest_ratio: 0.0,
      dominance: 0.0,
      gini: 0.0,
      deficiency: 0.0,
      expected_files: 0.0,
    }
  }
}

/// Extracts `inconsistency_score`.
#[derive(Debug, Default)]
pub struct CodeStructureExtractor;

impl CodeStructureExtractor {
  pub fn new() -> Self {
    Self
  }
}

impl SignalExtractor for CodeStructureExtractor {
  fn name(&self) -> &'static str {
    "code_structure"
  }

  fn extract(&self, repo: &Path) -> Result<Attributes, ExtractorError> {
    let report = scan(repo);
    let mut attributes = Attributes::new();
    attributes.insert(
      "inconsistency_score".into(),
      SignalValue::from(report.inconsistency_score),
    );
    Ok(attributes)
  }
}

/// Scan a repository's file tree and score its structure.
///
/// Unreadable files and files without a single non-blank line are excluded
/// from the sample; a read problem never aborts the scan.
pub fn scan(root: &Path) -> StructureReport {
  let mut line_counts: Vec<u64> = Vec::new();

  for entry in WalkDir::new(root)
    .into_iter()
    .filter_entry(|e| !is_git_metadata(e))
    .filter_map(|e| e.ok())
    .filter(|e| e.file_type().is_file() && has_source_extension(e.path()))
  {
    let lines = count_nonblank_lines(entry.path());
    if lines > 0 {
      line_counts.push(lines);
    }
  }

  score_sample(&line_counts)
}

/// Prune the version-control metadata directory from the walk.
fn is_git_metadata(entry: &DirEntry) -> bool {
  entry.file_type().is_dir() && entry.file_name() == ".git"
}

fn has_source_extension(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(|ext| {
      let ext = ext.to_ascii_lowercase();
      SOURCE_EXTENSIONS.iter().any(|known| *known == ext)
    })
    .unwrap_or(false)
}

/// Non-blank line count; 0 on any read error (the file is then excluded).
fn count_nonblank_lines(path: &Path) -> u64 {
  match fs::read_to_string(path) {
    Ok(contents) => contents.lines().filter(|l| !l.trim().is_empty()).count() as u64,
    Err(_) => 0,
  }
}

/// Score a sample of per-file line counts.
fn score_sample(line_counts: &[u64]) -> StructureReport {
  if line_counts.is_empty() {
    return StructureReport::empty();
  }

  let total_lines: u64 = line_counts.iter().sum();
  let file_count = line_counts.len();
  let largest = *line_counts.iter().max().unwrap_or(&0);

  let largest_ratio = largest as f64 / total_lines as f64;
  let dominance = ((largest_ratio - DOMINANCE_ONSET) / DOMINANCE_SPAN).clamp(0.0, 1.0);

  let gini = gini(line_counts);

  // Fewer files than sqrt(total lines) reads as insufficient decomposition.
  let expected_files = (total_lines as f64).sqrt();
  let structure_ratio = if expected_files > 0.0 {
    file_count as f64 / expected_files
  } else {
    1.0
  };
  let deficiency = (1.0 - structure_ratio).clamp(0.0, 1.0);

  let combined =
    DOMINANCE_WEIGHT * dominance + GINI_WEIGHT * gini + DEFICIENCY_WEIGHT * deficiency;

  StructureReport {
    inconsistency_score: round3(combined.clamp(0.0, 1.0)),
    total_lines,
    file_count,
    largest_ratio,
    dominance,
    gini,
    deficiency,
    expected_files,
  }
}

/// Gini coefficient over the sample: 0 for a uniform distribution, toward 1
/// as lines concentrate in one file. Formula over 1-indexed sorted values:
/// (2 * sum(i * v_i)) / (n * sum(v_i)) - (n + 1) / n.
pub fn gini(values: &[u64]) -> f64 {
  let total: u64 = values.iter().sum();
  if total == 0 {
    return 0.0;
  }

  let mut sorted = values.to_vec();
  sorted.sort_unstable();

  let n = sorted.len() as f64;
  let weighted: f64 = sorted
    .iter()
    .enumerate()
    .map(|(i, v)| (i as f64 + 1.0) * *v as f64)
    .sum();

  let g = (2.0 * weighted) / (n * total as f64) - (n + 1.0) / n;
  g.clamp(0.0, 1.0)
}

fn round3(v: f64) -> f64 {
  (v * 1000.0).round() / 1000.0
}
