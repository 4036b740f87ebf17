//! Token entities for JWT-based session authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use ink_shared::config::{ACCESS_KEY, REFRESH_KEY};

use super::user::User;

/// The two classes of session token
///
/// Each kind is signed with its own secret, so a token of one kind never
/// validates as the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Short-lived credential authorizing API requests
    Access,
    /// Longer-lived credential used only to mint new token pairs
    Refresh,
}

impl TokenKind {
    /// Key selecting this kind's entries in the auth configuration maps
    pub fn config_key(&self) -> &'static str {
        match self {
            TokenKind::Access => ACCESS_KEY,
            TokenKind::Refresh => REFRESH_KEY,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims structure for JWT payload
///
/// Fields are private: a `Claims` value is fixed once it has been issued or
/// decoded. `exp` is always strictly greater than `iat`: [`Claims::new`]
/// enforces it on issuance and token validation rejects decoded claims that
/// break it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    user_id: u64,
    username: String,
    email: String,

    /// Subject (the user's email)
    sub: String,

    /// Issued at timestamp
    iat: i64,

    /// Expiration timestamp
    exp: i64,
}

impl Claims {
    /// Creates claims for `user` valid from `issued_at` for `lifetime`
    ///
    /// # Returns
    ///
    /// `None` when `lifetime` is shorter than one second or the expiry
    /// timestamp would overflow.
    pub fn new(user: &User, issued_at: DateTime<Utc>, lifetime: Duration) -> Option<Self> {
        let seconds = lifetime.num_seconds();
        if seconds <= 0 {
            return None;
        }

        let iat = issued_at.timestamp();
        let exp = iat.checked_add(seconds)?;

        Some(Self {
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            sub: user.email.clone(),
            iat,
            exp,
        })
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Issued-at as a Unix timestamp
    pub fn issued_at(&self) -> i64 {
        self.iat
    }

    /// Expiry as a Unix timestamp
    pub fn expires_at(&self) -> i64 {
        self.exp
    }

    /// Span between issuance and expiry
    pub fn lifetime(&self) -> Duration {
        Duration::seconds(self.exp - self.iat)
    }

    /// Checks whether the claims have expired at `now`
    ///
    /// Expiry is inclusive: a token whose `exp` equals the current second is
    /// already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    /// Rebuilds the minimal user identity carried by the claims
    pub fn to_user(&self) -> User {
        User::new(self.user_id, self.username.clone(), self.email.clone())
    }
}

/// Token pair returned after authentication or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
