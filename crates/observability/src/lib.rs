//! Tracing/logging setup shared by catalog hosts and tests.

/// Logging configuration (filter, output format).
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, ObservabilityError};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// invalid `SPORTCAT_LOG_FORMAT` falls back to the default format.
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_else(|err| {
        eprintln!("{err}; using default log format");
        ObservabilityConfig::default()
    });
    tracing::init_with(&config);
}

/// Initialize process-wide observability with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init_with(config);
}
