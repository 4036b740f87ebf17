//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{RefreshError, TokenError};

pub use ink_shared::errors::ConfigError;

use thiserror::Error;

/// Core domain errors
///
/// Bridges the startup and token-path failures so a host can funnel them
/// through a single `?`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Refresh(#[from] RefreshError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
