//! Structured logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LUHNGEN_LOG=debug`.
pub const LOG_ENV: &str = "LUHNGEN_LOG";

/// Installs a stderr `tracing` subscriber filtered by [`LOG_ENV`].
///
/// Defaults to `warn` so command output on stdout stays clean. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
