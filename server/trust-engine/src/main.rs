//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is an Input (entity_id + attributes + context + meta).
//! Output lines are either:
//! - An Output (the decision for that entity)
//! - An ErrorOutput (when the line fails to parse)
//!
//! The engine itself is total: every well-typed line produces a decision.

use std::io::{self, BufRead, Write};
use trust_engine::types::{ErrorOutput, Input};
use trust_engine::Engine;

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let engine = Engine::with_defaults();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "trust-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let input: Input = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    let decision = engine.evaluate(&input);
    let _ = serde_json::to_writer(&mut out, &decision);
    let _ = writeln!(out);
  }

  let _ = out.flush();
}
