//! # Infrastructure Layer
//!
//! This crate wires the token core to the outside world:
//! - **Config**: layered file + environment loading into `AppConfig`
//! - **Logging**: console and per-level file sinks for `tracing` events
//! - **Bootstrap**: one call that loads config, installs logging and builds
//!   the shared token service
//!
//! Initialization returns errors instead of exiting; the host decides whether
//! to log-and-exit or fall back.

use std::path::Path;
use std::sync::Arc;

use ink_core::{TokenService, TokenServiceConfig};
use ink_shared::config::AppConfig;
use ink_shared::errors::ConfigError;

/// Configuration module for infrastructure services
pub mod config;

/// Logging module - console and per-level file sinks
pub mod logging;

use logging::{ComponentLogger, LoggingError};

const STARTUP_LOG: ComponentLogger = ComponentLogger::new("bootstrap");

/// Fully initialized services for the hosting application
#[derive(Clone)]
pub struct AppContext {
    config: AppConfig,
    tokens: Arc<TokenService>,
}

impl AppContext {
    /// Build the token service from an already loaded configuration
    ///
    /// Does not touch global logging, so it can run any number of times.
    pub fn from_config(config: AppConfig) -> Result<Self, InfrastructureError> {
        let token_config = TokenServiceConfig::from_auth_config(config.auth()?)?;

        Ok(Self {
            config,
            tokens: Arc::new(TokenService::new(&token_config)),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared handle to the token service
    pub fn tokens(&self) -> Arc<TokenService> {
        Arc::clone(&self.tokens)
    }
}

/// Initialize infrastructure services
///
/// This function:
/// - Loads configuration from `config_path` and the environment
/// - Installs the global logging subscriber
/// - Resolves token expiries and builds the token service
///
/// Logging is installed before the token configuration is resolved so that
/// time-unit warnings land in `warn.log`.
pub fn initialize(config_path: Option<&Path>) -> Result<AppContext, InfrastructureError> {
    let config = config::load_config(config_path)?;
    logging::init_logging(&config.logging)?;

    STARTUP_LOG.info(
        "initialize",
        format_args!("Logging to {}", config.logging.directory.display()),
    );

    let context = AppContext::from_config(config)?;

    STARTUP_LOG.info("initialize", format_args!("Token service ready"));

    Ok(context)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}
