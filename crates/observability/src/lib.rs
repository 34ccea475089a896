//! Shared tracing/logging bootstrap for services using the relay crates.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing/logging.
///
/// Emits JSON log lines with timestamps, filtered via `RUST_LOG` (default
/// `info`). Safe to call multiple times; later calls are no-ops, so every
/// service entry point (and test) can call it unconditionally.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
