//! Configuration builders and fixtures for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`AppConfig`] values, and
//! [`write_config_file`] to materialise TOML on disk for load-path tests.

use std::io::Write;

use tally_config::AppConfig;
use tempfile::NamedTempFile;

/// Fluent builder for [`AppConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .start_mode("scientific")
///     .history_capacity(4)
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn start_mode(mut self, mode: &str) -> Self {
        self.config.ui.start_mode = mode.to_string();
        self
    }

    pub fn tick_rate_ms(mut self, ms: u64) -> Self {
        self.config.ui.tick_rate_ms = ms;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history.capacity = capacity;
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a TOML string to a temp file and return the handle (the file is
/// removed when the handle drops).
pub fn write_config_file(toml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config file");
    file.write_all(toml.as_bytes()).expect("write temp config");
    file.flush().expect("flush temp config");
    file
}
