//! VM-005: Diagnostic logging to stderr.
//!
//! Stdout carries program output only, so the subscriber always writes to
//! stderr. `RUST_LOG` takes precedence over `-v`. Colour only when stderr
//! is a terminal.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Map `-v` repetitions to a filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber.
pub fn init(verbosity: u8) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_for(verbosity)))
        .map_err(|e| format!("invalid log filter: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| format!("cannot initialize logging: {}", e))
}
