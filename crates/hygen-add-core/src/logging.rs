//! Log subscriber setup
//!
//! Logs go to stderr so they never mix with the added/skipped lines on stdout.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// Respects `RUST_LOG`. Falls back to `debug` when `verbose` is set and
/// `warn` otherwise. Calling this more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
