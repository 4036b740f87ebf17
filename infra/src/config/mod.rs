//! Configuration loading for infrastructure services
//!
//! Handles:
//! - `.env` files (via `dotenvy`)
//! - An optional configuration file, format chosen by extension
//! - `INKWELL__`-prefixed environment overrides, e.g.
//!   `INKWELL__AUTH__SECRET_KEYS__ACCESS` or `INKWELL__LOGGING__DIRECTORY`

use ::config::{Config, Environment, File};
use std::path::Path;

use ink_shared::config::AppConfig;
use ink_shared::errors::ConfigError;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "INKWELL";

/// Separator between nested keys in environment overrides
pub const ENV_SEPARATOR: &str = "__";

/// Load application configuration
///
/// Environment variables take precedence over the file. A missing `auth`
/// section is not an error here; it surfaces when the token service is built.
///
/// # Errors
///
/// `ConfigError::Load` when the file is missing or unreadable, or the merged
/// settings do not deserialize.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()
        .map_err(|e| ConfigError::load(e.to_string()))?;

    settings
        .try_deserialize::<AppConfig>()
        .map_err(|e| ConfigError::load(e.to_string()))
}
