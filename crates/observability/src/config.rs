use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Environment variable selecting the output format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "SPORTCAT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObservabilityError {
    #[error("invalid log format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable, multi-line output.
    Pretty,
}

impl core::str::FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ObservabilityError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info` or `sportcat_catalog=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Result<Self, ObservabilityError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ObservabilityError> {
        let defaults = Self::default();
        let filter = lookup(FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(defaults.filter);
        let format = match lookup(FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => defaults.format,
        };
        Ok(Self { filter, format })
    }
}
