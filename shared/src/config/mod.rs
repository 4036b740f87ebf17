//! Configuration module
//!
//! This module organizes configuration into the areas the backend needs at startup:
//! - `auth` - Signing secrets, session timeouts and their time units
//! - `logging` - Log directory, level and console styling

pub mod auth;
pub mod logging;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

// Re-export commonly used types
pub use auth::{AuthConfig, ACCESS_KEY, REFRESH_KEY};
pub use logging::LoggingConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Authentication configuration (required before any token operation)
    #[serde(default)]
    pub auth: Option<AuthConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create a configuration from an auth section and default logging
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            auth: Some(auth),
            logging: LoggingConfig::default(),
        }
    }

    /// Set the logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Get the auth section, failing when the provider never supplied one
    pub fn auth(&self) -> Result<&AuthConfig, ConfigError> {
        self.auth.as_ref().ok_or_else(|| ConfigError::MissingSection {
            section: "auth".to_string(),
        })
    }
}
