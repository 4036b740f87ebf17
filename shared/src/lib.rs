//! Shared configuration and error types for the Inkwell backend
//!
//! This crate provides the pieces every other crate agrees on:
//! - Configuration types (authentication, logging)
//! - The configuration error raised when startup settings are unusable

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, LoggingConfig, ACCESS_KEY, REFRESH_KEY};
pub use errors::ConfigError;
