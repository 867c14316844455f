//! Logging setup
//!
//! Diagnostics go to stderr through `tracing` so stdout stays reserved for
//! help text and completion candidates.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `NSCLI_LOG=debug`
pub const LOG_ENV: &str = "NSCLI_LOG";

/// Install the global subscriber; later calls are no-ops
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
