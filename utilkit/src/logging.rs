//! Development-time tracing for the `utilkit` binary.
//!
//! The library emits `debug` events when a seeded rng is built
//! (`seed`) and when a config file is loaded or found missing (`path`,
//! `seed`); the binary adds one `debug` event naming who it greets. None of
//! these show at the default `warn` level. Everything goes to stderr, so
//! stdout carries only the greeting.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=utilkit=debug cargo run -- Alice
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
