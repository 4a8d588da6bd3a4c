//! Tracing/logging initialization.

use crate::config::{Config, LogFormat};
use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };
}
