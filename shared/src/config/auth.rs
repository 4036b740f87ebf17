//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Map key selecting access-token settings
pub const ACCESS_KEY: &str = "ACCESS";

/// Map key selecting refresh-token settings
pub const REFRESH_KEY: &str = "REFRESH";

/// Token signing configuration as supplied by the configuration provider
///
/// Each map is keyed by token kind (`ACCESS`, `REFRESH`). Layered config
/// sources lowercase map keys, so lookups ignore ASCII case.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HMAC secrets per token kind
    #[serde(default)]
    pub secret_keys: HashMap<String, String>,

    /// Session timeout values per token kind, in `time_units`
    #[serde(default)]
    pub session_timeouts: HashMap<String, i64>,

    /// Time unit names per token kind (`SECONDS`, `MINUTES`, `HOURS`)
    #[serde(default)]
    pub time_units: HashMap<String, String>,
}

impl AuthConfig {
    /// Create an empty auth configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the secret for a token kind
    pub fn with_secret(mut self, kind: &str, secret: impl Into<String>) -> Self {
        self.secret_keys.insert(kind.to_string(), secret.into());
        self
    }

    /// Set the session timeout and its unit for a token kind
    pub fn with_timeout(mut self, kind: &str, value: i64, unit: impl Into<String>) -> Self {
        self.session_timeouts.insert(kind.to_string(), value);
        self.time_units.insert(kind.to_string(), unit.into());
        self
    }

    /// Get the secret configured for a token kind
    pub fn secret_key(&self, kind: &str) -> Option<&str> {
        lookup(&self.secret_keys, kind).map(String::as_str)
    }

    /// Get the session timeout configured for a token kind
    pub fn session_timeout(&self, kind: &str) -> Option<i64> {
        lookup(&self.session_timeouts, kind).copied()
    }

    /// Get the time unit configured for a token kind
    pub fn time_unit(&self, kind: &str) -> Option<&str> {
        lookup(&self.time_units, kind).map(String::as_str)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.secret_keys.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("AuthConfig")
            .field("secret_keys", &kinds)
            .field("session_timeouts", &self.session_timeouts)
            .field("time_units", &self.time_units)
            .finish()
    }
}

fn lookup<'a, V>(map: &'a HashMap<String, V>, key: &str) -> Option<&'a V> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}
