//! Tracing/logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Verbosity is driven by `RUST_LOG` and defaults to `info`. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Human-readable output: the log stream is this program's only interface.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
