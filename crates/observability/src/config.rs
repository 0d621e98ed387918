use core::str::FromStr;

use thiserror::Error;

/// Filter directive variable (standard `tracing-subscriber` name).
pub const FILTER_VAR: &str = "RUST_LOG";

/// Output format variable.
pub const FORMAT_VAR: &str = "AUTHIDENT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line human-readable output for local development.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ObservabilityConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            f if f.eq_ignore_ascii_case("json") => Ok(LogFormat::Json),
            f if f.eq_ignore_ascii_case("pretty") => Ok(LogFormat::Pretty),
            other => Err(ObservabilityConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObservabilityConfigError {
    #[error("unknown log format {0:?} (expected \"json\" or \"pretty\")")]
    UnknownFormat(String),
}

/// Observability settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info` or `authident_auth=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ObservabilityConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ObservabilityConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let filter = present(FILTER_VAR).unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = match present(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}
