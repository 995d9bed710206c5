//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.
//! `RUST_LOG` takes precedence over the configured level when set.

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::Environment;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "debug")
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
    /// Include file and line numbers
    pub file_line: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            file_line: true,
        }
    }
}

impl TelemetryConfig {
    /// Pick a configuration appropriate for the runtime environment:
    /// pretty debug output in development, JSON at info in production.
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: Level::DEBUG,
                json: false,
                file_line: true,
            },
            Environment::Staging => Self::default(),
            Environment::Production => Self {
                level: Level::INFO,
                json: true,
                file_line: false,
            },
        }
    }
}

/// Initialize the tracing subscriber for the given environment
///
/// # Panics
/// Panics if a global subscriber is already set.
pub fn init_telemetry(env: Environment) {
    try_init(TelemetryConfig::for_environment(env)).expect("tracing already initialized");
}

/// Try to initialize tracing with default configuration, returning an error
/// instead of panicking when a subscriber is already installed.
pub fn try_init_telemetry() -> Result<(), TelemetryError> {
    try_init(TelemetryConfig::default())
}

fn try_init(config: TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let result = if config.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_file(config.file_line)
            .with_line_number(config.file_line);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_file(config.file_line)
            .with_line_number(config.file_line);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
    };

    result.map_err(|_| TelemetryError::AlreadyInitialized)
}

/// Telemetry initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
