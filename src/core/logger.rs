//! Logging Infrastructure

use tracing_subscriber::EnvFilter;

/// Initialize the logger.
///
/// Level comes from `RUST_LOG`; defaults to `warn` so diagnostics do not
/// interleave with the interactive menu on stdout.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
