//! Diagnostic logging to stderr.
//!
//! User-facing output goes through `reporting::console`; this subscriber only
//! carries `tracing` diagnostics, filtered by `EXEC_RUNNER_LOG`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic filter (e.g. `debug`).
pub const LOG_ENV: &str = "EXEC_RUNNER_LOG";

/// Installs the global subscriber. `verbose` forces debug level for this crate.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("exec_runner=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
