//! Observability configuration, read from the environment.

use std::str::FromStr;

use thiserror::Error;

/// Env var holding the log filter directive (standard `tracing-subscriber` name).
pub const FILTER_ENV: &str = "RUST_LOG";

/// Env var selecting the log output format.
pub const FORMAT_ENV: &str = "NAMEMINT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported log format {0:?} (expected \"json\" or \"pretty\")")]
    InvalidFormat(String),
}

/// Output format of the installed subscriber.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, with timestamps.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::InvalidFormat(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info` or `namemint_core=trace`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Build from `RUST_LOG` and `NAMEMINT_LOG_FORMAT`; unset variables take defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let filter = lookup(FILTER_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        let format = match lookup(FORMAT_ENV) {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => LogFormat::default(),
        };
        Ok(Self { filter, format })
    }
}
