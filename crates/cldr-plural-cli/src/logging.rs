//! Structured logging with environment variable configuration.
//!
//! Logs go to stderr so that stdout stays clean for table and JSON output.

use std::io::stderr;

use tracing::subscriber::set_global_default;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_ENV: &str = "CLDR_PLURAL_LOG";

/// Choose the filter directive.
///
/// Precedence (highest to lowest):
///
/// 1. `--log-level` on the command line, or `CLDR_PLURAL_LOG` via clap's env
///    fallback
/// 2. `debug` when `--verbose` is set
/// 3. `warn`
fn filter_directive(log_level: Option<&str>, verbose: bool) -> String {
    match log_level {
        Some(level) => level.to_string(),
        None if verbose => "debug".to_string(),
        None => "warn".to_string(),
    }
}

/// Initialise the logging subsystem.
///
/// An unparseable directive falls back to `warn`. If a global subscriber is
/// already set, this function silently ignores the error.
pub fn init_logging(log_level: Option<&str>, verbose: bool) {
    let directive = filter_directive(log_level, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    // The first subscriber wins.
    let _ = set_global_default(subscriber);
}
