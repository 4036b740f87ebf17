//! Configuration for the token service

use chrono::Duration;
use std::fmt;

use ink_shared::config::AuthConfig;
use ink_shared::errors::ConfigError;

use super::duration::resolve_duration;
use crate::domain::entities::token::TokenKind;

/// Secrets and expiries for both token kinds
///
/// Built once at startup and read-only afterwards. `Debug` output never
/// includes the secrets.
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// HMAC secret for access tokens
    pub access_secret: Vec<u8>,
    /// HMAC secret for refresh tokens
    pub refresh_secret: Vec<u8>,
    /// Access token lifetime
    pub access_expiry: Duration,
    /// Refresh token lifetime
    pub refresh_expiry: Duration,
}

impl TokenServiceConfig {
    pub fn new(
        access_secret: impl Into<Vec<u8>>,
        refresh_secret: impl Into<Vec<u8>>,
        access_expiry: Duration,
        refresh_expiry: Duration,
    ) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_expiry,
            refresh_expiry,
        }
    }

    /// Builds the token configuration from the provider's auth section
    ///
    /// Timeouts go through [`resolve_duration`], so an unknown unit falls back
    /// to seconds with a warning instead of failing.
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingSecret` / `ConfigError::EmptySecret` - a kind has no usable secret
    /// * `ConfigError::MissingTimeout` - a kind has no session timeout
    /// * `ConfigError::NonPositiveTimeout` - the resolved expiry is under one second
    pub fn from_auth_config(auth: &AuthConfig) -> Result<Self, ConfigError> {
        let access_secret = secret_for(auth, TokenKind::Access)?;
        let refresh_secret = secret_for(auth, TokenKind::Refresh)?;
        let access_expiry = expiry_for(auth, TokenKind::Access)?;
        let refresh_expiry = expiry_for(auth, TokenKind::Refresh)?;

        Ok(Self::new(access_secret, refresh_secret, access_expiry, refresh_expiry))
    }

    /// Secret used to sign and verify tokens of `kind`
    pub fn secret(&self, kind: TokenKind) -> &[u8] {
        match kind {
            TokenKind::Access => &self.access_secret,
            TokenKind::Refresh => &self.refresh_secret,
        }
    }

    /// Lifetime of tokens of `kind`
    pub fn expiry(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_expiry,
            TokenKind::Refresh => self.refresh_expiry,
        }
    }
}

impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_expiry", &self.access_expiry)
            .field("refresh_expiry", &self.refresh_expiry)
            .finish()
    }
}

fn secret_for(auth: &AuthConfig, kind: TokenKind) -> Result<Vec<u8>, ConfigError> {
    let key = kind.config_key();
    let secret = auth.secret_key(key).ok_or_else(|| ConfigError::MissingSecret {
        kind: key.to_string(),
    })?;

    if secret.is_empty() {
        return Err(ConfigError::EmptySecret {
            kind: key.to_string(),
        });
    }

    Ok(secret.as_bytes().to_vec())
}

fn expiry_for(auth: &AuthConfig, kind: TokenKind) -> Result<Duration, ConfigError> {
    let key = kind.config_key();
    let value = auth
        .session_timeout(key)
        .ok_or_else(|| ConfigError::MissingTimeout {
            kind: key.to_string(),
        })?;

    // A missing unit resolves like any other unknown unit.
    let expiry = resolve_duration(value, auth.time_unit(key).unwrap_or_default());
    if expiry.num_seconds() <= 0 {
        return Err(ConfigError::NonPositiveTimeout {
            kind: key.to_string(),
            seconds: expiry.num_seconds(),
        });
    }

    Ok(expiry)
}
