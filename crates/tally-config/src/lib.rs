#![deny(unsafe_code)]

//! Configuration loading and validation for tally.
//!
//! Loads TOML configuration files and validates them against expected
//! ranges. Provides the [`AppConfig`] type as the central configuration
//! structure shared by the CLI and TUI front ends.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Front-end behaviour.
    #[serde(default)]
    pub ui: UiConfig,

    /// History tape configuration.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Front-end behaviour shared by the CLI and TUI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Keypad group shown at startup: "basic" or "scientific".
    #[serde(default = "default_start_mode")]
    pub start_mode: String,

    /// TUI event-poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_mode: default_start_mode(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_start_mode() -> String {
    "basic".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

/// History tape configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of calculations kept on the tape.
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

fn default_history_capacity() -> usize {
    64
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_modes = ["basic", "scientific"];
        if !valid_modes.contains(&self.ui.start_mode.as_str()) {
            return Err(ConfigError::Validation(format!(
                "ui.start_mode must be one of {:?}, got {:?}",
                valid_modes, self.ui.start_mode
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be non-zero".to_string(),
            ));
        }
        if self.history.capacity == 0 {
            return Err(ConfigError::Validation(
                "history.capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
