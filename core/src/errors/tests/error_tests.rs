//! Unit tests for domain errors

use std::error::Error as _;

use crate::errors::{ConfigError, DomainError, RefreshError, TokenError};

#[test]
fn test_token_error_messages() {
    assert_eq!(TokenError::Malformed.to_string(), "invalid or malformed token");
    assert_eq!(TokenError::Expired.to_string(), "token has expired");
    assert_eq!(
        TokenError::signing("bad key").to_string(),
        "failed to sign token: bad key"
    );
}

#[test]
fn test_token_error_codes() {
    assert_eq!(TokenError::Malformed.code(), "INVALID_TOKEN");
    assert_eq!(TokenError::Expired.code(), "TOKEN_EXPIRED");
    assert_eq!(TokenError::signing("x").code(), "TOKEN_SIGNING_FAILED");
}

#[test]
fn test_refresh_error_reasons() {
    let invalid = RefreshError::InvalidRefreshToken(TokenError::Malformed);
    let expired = RefreshError::RefreshTokenExpired(TokenError::Expired);
    let failed = RefreshError::GenerationFailed(TokenError::signing("boom"));

    assert_eq!(invalid.to_string(), "invalid or expired refresh token");
    assert_eq!(expired.to_string(), "refresh token has expired");
    assert_eq!(failed.to_string(), "failed to generate new tokens");
    assert_eq!(failed.code(), "TOKEN_GENERATION_FAILED");
}

#[test]
fn test_refresh_error_exposes_source() {
    let err = RefreshError::InvalidRefreshToken(TokenError::Expired);

    assert_eq!(err.cause(), &TokenError::Expired);
    let source = err.source().expect("refresh errors carry their cause");
    assert_eq!(source.to_string(), "token has expired");
}

#[test]
fn test_domain_error_bridges() {
    let err: DomainError = TokenError::Malformed.into();
    assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
    assert_eq!(err.to_string(), "invalid or malformed token");

    let err: DomainError = ConfigError::MissingSecret { kind: "ACCESS".to_string() }.into();
    assert!(matches!(err, DomainError::Config(_)));

    let err: DomainError = RefreshError::GenerationFailed(TokenError::Malformed).into();
    assert_eq!(err.to_string(), "failed to generate new tokens");
}
