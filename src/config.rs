//! Configuration for appendkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default name of the log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "data.db";

/// Main configuration for a Store instance
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the append-only log file.
    /// Created empty on first open; its parent directory must already exist.
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the log file path
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
