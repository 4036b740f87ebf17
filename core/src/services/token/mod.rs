//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Resolving configured session timeouts into expiry durations
//! - HS256 access and refresh token generation
//! - Token validation with an explicit expiry re-check
//! - Refresh token rotation into a new token pair

mod clock;
mod config;
mod duration;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::TokenServiceConfig;
pub use duration::{resolve_duration, TimeUnit, UnknownTimeUnit};
pub use service::TokenService;
