//! Logging setup
//!
//! `tracing` events go to stderr through a `tracing-subscriber` fmt layer so
//! stdout stays free for artifacts and NDJSON events.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Verbosity;

/// Default filter directive for a verbosity level
pub fn filter_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "info",
        Verbosity::Debug => "debug",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the filter is derived from
/// `verbosity`. Calling this twice is harmless.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= Verbosity::Debug)
        .try_init();
}

/// Subscriber for tests: everything at debug, captured per test
#[cfg(test)]
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
