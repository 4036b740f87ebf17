//! Configuration error types

use thiserror::Error;

/// Errors raised while assembling startup configuration
///
/// Every variant is fatal for the hosting process: token operations must not
/// run against a half-initialized configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration could not be loaded: {message}")]
    Load { message: String },

    #[error("Missing configuration section: {section}")]
    MissingSection { section: String },

    #[error("Missing secret key for {kind} tokens")]
    MissingSecret { kind: String },

    #[error("Secret key for {kind} tokens must not be empty")]
    EmptySecret { kind: String },

    #[error("Missing session timeout for {kind} tokens")]
    MissingTimeout { kind: String },

    #[error("Session timeout for {kind} tokens must be positive, got {seconds}s")]
    NonPositiveTimeout { kind: String, seconds: i64 },
}

impl ConfigError {
    /// Wrap any loader failure message
    pub fn load(message: impl Into<String>) -> Self {
        ConfigError::Load {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_token_kind() {
        let err = ConfigError::MissingSecret {
            kind: "ACCESS".to_string(),
        };
        assert_eq!(err.to_string(), "Missing secret key for ACCESS tokens");

        let err = ConfigError::NonPositiveTimeout {
            kind: "REFRESH".to_string(),
            seconds: 0,
        };
        assert_eq!(
            err.to_string(),
            "Session timeout for REFRESH tokens must be positive, got 0s"
        );
    }

    #[test]
    fn test_load_helper() {
        let err = ConfigError::load("file not found");
        assert_eq!(err, ConfigError::Load { message: "file not found".to_string() });
    }
}
