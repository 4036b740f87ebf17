//! User identity as seen by the token layer.

use serde::{Deserialize, Serialize};

/// Identity fields of a registered user
///
/// User records are owned by the user-management component; the token layer
/// only reads these three fields and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Unique numeric identifier for the user
    pub id: u64,

    /// Display name
    pub username: String,

    /// Contact email, also used as the token subject
    pub email: String,
}

impl User {
    /// Creates a new User instance
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}
