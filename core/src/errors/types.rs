//! Error types for token issuance, validation and refresh
//!
//! The validator deliberately collapses every parse and signature failure into
//! [`TokenError::Malformed`]; callers only learn that a token is unusable or
//! that it has expired.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("failed to sign token: {message}")]
    Signing { message: String },

    #[error("invalid or malformed token")]
    Malformed,

    #[error("token has expired")]
    Expired,
}

impl TokenError {
    pub(crate) fn signing(message: impl Into<String>) -> Self {
        TokenError::Signing {
            message: message.into(),
        }
    }

    /// Error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Signing { .. } => "TOKEN_SIGNING_FAILED",
            TokenError::Malformed => "INVALID_TOKEN",
            TokenError::Expired => "TOKEN_EXPIRED",
        }
    }
}

/// Refresh failures, each wrapping the token error that caused it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefreshError {
    #[error("invalid or expired refresh token")]
    InvalidRefreshToken(#[source] TokenError),

    #[error("refresh token has expired")]
    RefreshTokenExpired(#[source] TokenError),

    #[error("failed to generate new tokens")]
    GenerationFailed(#[source] TokenError),
}

impl RefreshError {
    /// The token error underneath this refresh failure
    pub fn cause(&self) -> &TokenError {
        match self {
            RefreshError::InvalidRefreshToken(err)
            | RefreshError::RefreshTokenExpired(err)
            | RefreshError::GenerationFailed(err) => err,
        }
    }

    /// Error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            RefreshError::InvalidRefreshToken(_) => "INVALID_REFRESH_TOKEN",
            RefreshError::RefreshTokenExpired(_) => "REFRESH_TOKEN_EXPIRED",
            RefreshError::GenerationFailed(_) => "TOKEN_GENERATION_FAILED",
        }
    }
}
