//! Tracing setup for the journal binary.
//!
//! The journal talks to the user on stdout (prompts, then the report), so
//! diagnostics are written to stderr. The default level is `warn`: a normal
//! run shows nothing but the skipped-workout warning, while `RUST_LOG=debug`
//! exposes parsing and report details.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the stderr subscriber at [`DEFAULT_LEVEL`]
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Install the stderr subscriber, falling back to `default_level`
pub fn init_with_level(default_level: &str) {
    tracing_subscriber::registry()
        .with(filter_or(default_level))
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// `RUST_LOG` if it parses, otherwise `default_level`
fn filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Route logs through the test harness so they show only for failing tests
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
