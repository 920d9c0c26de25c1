//! Shared setup for the gravbasin examples.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a console subscriber for `tracing` events.
///
/// The filter comes from `RUST_LOG` and defaults to `info`, so
/// `RUST_LOG=gravbasin_prism=debug` shows what the forward model is doing.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (e.g. from another example in the same process) is harmless.
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
