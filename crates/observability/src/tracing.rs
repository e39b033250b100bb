//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging from the environment.
///
/// An invalid `NAMEMINT_LOG_FORMAT` falls back to the default configuration.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_default();
    init_with(&config);
}

/// Initialize tracing/logging with an explicit configuration.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init()
            .is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
    }
}
