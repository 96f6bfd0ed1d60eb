//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is an InboundJob ({"repo_path": ..., "entity_id"?: ...}).
//! Output lines are either:
//! - A JobOutput (attributes + meta for that checkout)
//! - An ErrorOutput (parse failure, or an extractor failed)
//!
//! Cloning/fetching is the caller's job; repo_path must already be a checkout.

use signal_pipeline::types::{ErrorOutput, InboundJob, JobOutput};
use signal_pipeline::SignalPipeline;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let pipeline = SignalPipeline::with_defaults();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "signal-pipeline: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let job: InboundJob = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    match pipeline.run(Path::new(&job.repo_path)) {
      Ok(output) => {
        let result = JobOutput::new(job.entity_id, output);
        let _ = serde_json::to_writer(&mut out, &result);
        let _ = writeln!(out);
      }
      Err(e) => {
        let err = ErrorOutput::new(e.to_string()).with_entity(job.entity_id);
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
      }
    }
  }

  let _ = out.flush();
}
