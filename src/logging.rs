//! Structured stderr logging via `tracing`.
//!
//! `RUST_LOG` wins when set; otherwise the `--log-level` value is used as
//! the filter directive. The in-app [`EventLog`](crate::event_log::EventLog)
//! forwards every entry here under the `handover::events` target.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when neither `RUST_LOG` nor `--log-level` parse.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the filter: `RUST_LOG` first, then `level`, then [`DEFAULT_LOG_LEVEL`].
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Initialize the global logging subscriber.
///
/// Call once at startup. A second call (or a subscriber installed by a test
/// harness) is silently ignored.
pub fn init_logging(level: &str) {
    let result = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).compact())
        .try_init();

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}
