use std::io::stderr;

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the tracing subscriber with environment based filtering.
///
/// Reads `RUST_LOG`, then `LOG_LEVEL`, and falls back to the given default level. Logs go to
/// stderr, stdout is reserved for notifications.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(stderr)
        .init();
}
