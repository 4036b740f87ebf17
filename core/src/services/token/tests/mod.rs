//! Tests for the token service


use chrono::Duration;

use crate::domain::entities::user::User;
use crate::services::token::TokenServiceConfig;

pub(super) const ACCESS_SECRET: &str = "access-secret-for-tests";
pub(super) const REFRESH_SECRET: &str = "refresh-secret-for-tests";

pub(super) fn test_config() -> TokenServiceConfig {
    TokenServiceConfig::new(
        ACCESS_SECRET,
        REFRESH_SECRET,
        Duration::minutes(15),
        Duration::days(7),
    )
}

pub(super) fn test_user() -> User {
    User::new(7, "grace", "grace@example.com")
}
