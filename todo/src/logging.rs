//! Diagnostic tracing for the tracker.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`. Command output
//! (task lists, confirmations) is printed to stdout by the binary and is
//! unaffected by the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: only duplicate-id warnings and worse reach the terminal.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber; call once from `main` before any command runs.
///
/// `RUST_LOG=todo=debug` traces every store load and save, including the
/// resolved store path and task counts.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
