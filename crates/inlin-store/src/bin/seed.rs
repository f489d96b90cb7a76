//! # Seed Dataset Dump
//!
//! Prints the sample dataset as JSON, for fixtures on the presentation
//! side.
//!
//! ## Usage
//! ```bash
//! # Everything
//! cargo run -p inlin-store --bin seed
//!
//! # One collection
//! cargo run -p inlin-store --bin seed -- --only leaveRequests
//! ```

use std::env;
use std::process::ExitCode;

use inlin_store::seed;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let mut only: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--only" | "-o" => {
                only = args.get(i + 1).cloned();
                i += 1;
            }
            "--help" | "-h" => {
                println!("InlinTech seed dataset dump");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --only <NAME>  users | employees | inventory | leaveRequests");
                println!("  -h, --help         Show this help message");
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
        i += 1;
    }

    let dataset = match serde_json::to_value(seed::dataset()) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Failed to serialize dataset: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = match only.as_deref() {
        Some(name) => match dataset.get(name) {
            Some(collection) => collection.clone(),
            None => {
                eprintln!("Unknown collection: {name}");
                return ExitCode::FAILURE;
            }
        },
        None => dataset,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize dataset: {e}");
            ExitCode::FAILURE
        }
    }
}
