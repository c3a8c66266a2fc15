//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so they never mix with generated output or reports.
//! `LOCGEN_LOG` takes an `EnvFilter` directive string; without it the level
//! is `warn`, or `debug` when `--verbose` is given.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LOCGEN_LOG";

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "locgen=debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
