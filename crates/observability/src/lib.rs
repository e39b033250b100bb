//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Environment-driven configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
pub use tracing::init_with;
