//! score-repo: one-shot trust score for a local repository checkout
//!
//! Usage:
//!   score-repo <repo-path>            # evaluate with medium priority
//!   score-repo <repo-path> <priority> # priority: low | medium | high
//!
//! Runs the signal pipeline over the checkout, feeds the attribute mapping
//! into the trust engine with default meta, and prints the decision as
//! pretty JSON. Cloning/fetching is out of scope: the path must already be
//! a checkout at the revision you want scored.

use std::env;
use std::path::Path;
use std::process;

use signal_pipeline::SignalPipeline;
use trust_engine::types::{Context, Input, Meta, Priority};
use trust_engine::Engine;

fn parse_priority(arg: &str) -> Priority {
    match arg {
        "low" => Priority::Low,
        "medium" => Priority::Medium,
        "high" => Priority::High,
        other => {
            eprintln!("score-repo: unknown priority '{}' (use low|medium|high)", other);
            process::exit(2);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: score-repo <repo-path> [low|medium|high]");
        process::exit(2);
    }

    let repo_path = &args[1];
    let priority = args
        .get(2)
        .map(|a| parse_priority(a))
        .unwrap_or(Priority::Medium);

    let output = SignalPipeline::with_defaults()
        .run(Path::new(repo_path))
        .unwrap_or_else(|e| {
            eprintln!("score-repo: {}", e);
            process::exit(1);
        });

    // The two engines share only the JSON attribute vocabulary; hand the
    // mapping across the same way an orchestrator would.
    let attributes = serde_json::to_value(&output.attributes)
        .and_then(serde_json::from_value)
        .unwrap_or_else(|e| {
            eprintln!("score-repo: attribute mapping: {}", e);
            process::exit(1);
        });

    let input = Input {
        entity_id: repo_path.clone(),
        attributes,
        context: Context {
            priority_level: priority,
        },
        meta: Meta::default(),
    };

    let decision = Engine::with_defaults().evaluate(&input);
    match serde_json::to_string_pretty(&decision) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("score-repo: serialize: {}", e);
            process::exit(1);
        }
    }
}
