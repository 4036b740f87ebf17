//! Logging configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Directory holding `info.log`, `warn.log` and `error.log`
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Log level filter (trace, debug, info, warn, error or an env-filter directive)
    #[serde(default = "default_level")]
    pub level: String,

    /// Enable colored console output (files never carry ANSI codes)
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            level: default_level(),
            ansi: default_ansi(),
        }
    }
}

impl LoggingConfig {
    /// Create logging config writing into `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Set the level filter
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Enable or disable console colors
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("logs")
}

fn default_level() -> String {
    String::from("info")
}

fn default_ansi() -> bool {
    true
}
