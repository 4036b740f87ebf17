//! # Inkwell Core
//!
//! Core domain layer for the Inkwell backend.
//! This crate contains the token lifecycle: domain entities (users, claims,
//! token pairs), the signing/validation/refresh service, and the error types
//! those operations return.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
