//! Domain layer containing the entities the token lifecycle works on.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
