//! # InlinTech Console Library
//!
//! The application shell of the admin dashboard. The presentation layer
//! (a web page, a TUI, a test harness) talks to it in newline-delimited
//! JSON: one intent per line in, one response per line out.
//!
//! ## Module Organization
//! ```text
//! inlin_console/
//! ├── lib.rs          ◄─── You are here (setup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Arc<Mutex<Store>> wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── One module per entity
//! ├── intent.rs       ◄─── Intent enum + dispatch
//! └── error.rs        ◄─── API error type
//! ```
//!
//! ## Wire Protocol
//! ```text
//! stdin  ► {"intent":"login","email":"sarah@inlintech.net","password":"demo123"}
//! stdout ◄ {"ok":true,"notification":{...},"session":{...},"view":{"page":"dashboard",...}}
//!
//! stdin  ► {"intent":"navigate","page":"admin"}
//! stdout ◄ {"ok":false,"error":{"code":"UNAUTHORIZED",...},"notification":{...}}
//! ```
//!
//! Logs go to stderr so stdout stays a clean JSON channel.

pub mod commands;
pub mod error;
pub mod intent;
pub mod state;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use error::ApiError;
use intent::{dispatch, Intent, Notification, NotificationLevel, Outcome};
use state::{ConfigState, StoreState};

/// One line of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success {
        ok: bool,
        #[serde(flatten)]
        outcome: Outcome,
    },
    Failure {
        ok: bool,
        error: ApiError,
        notification: Notification,
    },
}

impl Response {
    fn success(outcome: Outcome) -> Self {
        Response::Success { ok: true, outcome }
    }

    fn failure(error: ApiError) -> Self {
        Response::Failure {
            ok: false,
            notification: Notification::new(NotificationLevel::Error, error.message.clone()),
            error,
        }
    }
}

/// Parses and dispatches one input line. Never fails: errors become a
/// `Failure` response.
pub fn handle_line(state: &StoreState, config: &ConfigState, line: &str) -> Response {
    let result = serde_json::from_str::<Intent>(line)
        .map_err(ApiError::from)
        .and_then(|intent| dispatch(state, config, intent));

    match result {
        Ok(outcome) => Response::success(outcome),
        Err(error) => {
            warn!(code = ?error.code, message = %error.message, "Intent failed");
            Response::failure(error)
        }
    }
}

/// Serves intents from `input` until it is exhausted.
///
/// ## Returns
/// Number of intents handled (blank lines are skipped).
pub fn serve<R: BufRead, W: Write>(
    state: &StoreState,
    config: &ConfigState,
    input: R,
    mut output: W,
) -> anyhow::Result<usize> {
    let mut handled = 0;

    for line in input.lines() {
        let line = line.context("Failed to read intent")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(state, config, &line);
        let json = encode(&response)?;
        writeln!(output, "{json}").context("Failed to write response")?;
        output.flush().context("Failed to flush response")?;
        handled += 1;
    }

    Ok(handled)
}

/// One output line. A value that will not encode becomes an `INTERNAL`
/// failure, so the caller still gets an answer for its intent.
fn encode<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_string(value) {
        Ok(json) => Ok(json),
        Err(err) => {
            error!(%err, "Failed to encode response");
            let fallback = Response::failure(ApiError::internal("Failed to encode response"));
            serde_json::to_string(&fallback).context("Failed to encode error response")
        }
    }
}

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: info,inlin=debug; override with RUST_LOG                 │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • INLIN_* environment variables over defaults                       │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • StoreState: seeded or empty, signed out                           │
/// │                                                                         │
/// │  4. Serve stdin until EOF ────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting InlinTech dashboard console");

    let config = ConfigState::from_env();
    let state = StoreState::from_config(&config);
    info!(
        company = %config.company_name,
        seeded = config.seed,
        "State initialized"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let handled = serve(&state, &config, stdin.lock(), stdout.lock())?;

    info!(handled, "Input closed, shutting down");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=inlin=trace` - Show trace for inlin crates only
/// - Default: `info,inlin=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inlin=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
