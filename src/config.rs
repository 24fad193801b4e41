//! Configuration management for telco-colors.
//!
//! Settings resolve in order: CLI overrides, then environment variables,
//! then built-in defaults.

use crate::manual::OutputFormat;
use tracing::Level;

pub const LOG_LEVEL_ENV: &str = "TELCO_LOG_LEVEL";
pub const FORMAT_ENV: &str = "TELCO_FORMAT";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum level emitted by the log subscriber
    pub log_level: Level,
    /// Manual output format
    pub format: OutputFormat,
}

/// CLI configuration overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Log level override
    pub log_level: Option<Level>,
    /// Output format override
    pub format: Option<OutputFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration with CLI overrides
    pub fn load(cli_overrides: Option<CliOverrides>) -> Self {
        let mut config = Self::default();
        let overrides = cli_overrides.unwrap_or_default();

        // CLI overrides take precedence over the environment
        match overrides.log_level {
            Some(level) => config.log_level = level,
            None => {
                if let Some(level) = std::env::var(LOG_LEVEL_ENV)
                    .ok()
                    .and_then(|value| value.parse::<Level>().ok())
                {
                    config.log_level = level;
                }
            }
        }

        match overrides.format {
            Some(format) => config.format = format,
            None => {
                if let Some(format) = std::env::var(FORMAT_ENV)
                    .ok()
                    .and_then(|value| OutputFormat::parse(&value))
                {
                    config.format = format;
                }
            }
        }

        config
    }
}

impl CliOverrides {
    /// Create CLI overrides from CLI arguments
    pub fn from_cli_args(log_level: Option<Level>, format: Option<OutputFormat>) -> Self {
        Self { log_level, format }
    }
}
