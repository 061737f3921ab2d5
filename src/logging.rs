//! Logging initialization.
//!
//! Installs a `tracing-subscriber` fmt subscriber writing to stderr, so the
//! RPC binary's stdout carries protocol lines only.

use tracing_subscriber::EnvFilter;

use crate::types::settings::LoggingSettings;

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init_logging(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
