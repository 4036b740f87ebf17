//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{RefreshError, TokenError};

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;

/// Precomputed signing material for one token kind
struct KindKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
    has_secret: bool,
}

impl KindKeys {
    fn new(secret: &[u8], expiry: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expiry,
            has_secret: !secret.is_empty(),
        }
    }
}

/// Service for issuing, validating and refreshing HS256 session tokens
///
/// Holds only immutable state after construction, so a single instance can be
/// shared behind an `Arc` and called from any number of threads.
///
/// Refreshing never invalidates the presented refresh token: it stays usable
/// until its own expiry, since nothing is stored server-side.
pub struct TokenService<C: Clock = SystemClock> {
    access: KindKeys,
    refresh: KindKeys,
    validation: Validation,
    clock: C,
}

impl TokenService<SystemClock> {
    /// Creates a token service reading the system clock
    pub fn new(config: &TokenServiceConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TokenService<C> {
    /// Creates a token service with an explicit time source
    ///
    /// The clock stamps `iat`/`exp` on issued tokens and drives the expiry
    /// re-check after signature verification.
    pub fn with_clock(config: &TokenServiceConfig, clock: C) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            access: KindKeys::new(&config.access_secret, config.access_expiry),
            refresh: KindKeys::new(&config.refresh_secret, config.refresh_expiry),
            validation,
            clock,
        }
    }

    fn keys(&self, kind: TokenKind) -> &KindKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    /// Generates a new token pair (access + refresh tokens) for a user
    ///
    /// # Arguments
    ///
    /// * `user` - Identity to embed; only `id`, `username` and `email` are read
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated token pair
    /// * `Err(TokenError::Signing)` - Either token could not be signed
    pub fn generate_tokens(&self, user: &User) -> Result<TokenPair, TokenError> {
        let access_token = self.generate_token(user, TokenKind::Access)?;
        let refresh_token = self.generate_token(user, TokenKind::Refresh)?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    fn generate_token(&self, user: &User, kind: TokenKind) -> Result<String, TokenError> {
        let expiry = self.keys(kind).expiry;
        let claims = Claims::new(user, self.clock.now(), expiry).ok_or_else(|| {
            TokenError::signing(format!(
                "{kind} token lifetime of {}s is not usable",
                expiry.num_seconds()
            ))
        })?;

        self.encode_claims(&claims, kind)
    }

    /// Encodes claims into a JWT signed with the secret for `kind`
    pub(crate) fn encode_claims(&self, claims: &Claims, kind: TokenKind) -> Result<String, TokenError> {
        let keys = self.keys(kind);
        if !keys.has_secret {
            return Err(TokenError::signing(format!("{kind} signing secret is empty")));
        }

        encode(&Header::new(Algorithm::HS256), claims, &keys.encoding_key)
            .map_err(|e| TokenError::signing(e.to_string()))
    }

    /// Verifies a token of the given kind and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT string
    /// * `kind` - Which secret the token must have been signed with
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::Malformed)` - Unparsable, bad signature, wrong secret or algorithm,
    ///   empty secret for `kind`, or `exp` not after `iat`
    /// * `Err(TokenError::Expired)` - Signature valid but `exp` is not in the future
    pub fn validate_token(&self, token: &str, kind: TokenKind) -> Result<Claims, TokenError> {
        let keys = self.keys(kind);
        // An empty HMAC key authenticates nothing.
        if !keys.has_secret {
            return Err(TokenError::Malformed);
        }

        let token_data = decode::<Claims>(token, &keys.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        let claims = token_data.claims;
        if claims.expires_at() <= claims.issued_at() {
            return Err(TokenError::Malformed);
        }

        // Checked again against our own clock even though the decoder already
        // validated `exp`.
        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Verifies an access token and returns the claims
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_token(token, TokenKind::Access)
    }

    /// Verifies a refresh token and returns the claims
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_token(token, TokenKind::Refresh)
    }

    /// Mints a new token pair from a valid refresh token
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - A refresh-class token issued by this service
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New tokens carrying the same identity
    /// * `Err(RefreshError::InvalidRefreshToken)` - Validation failed (includes access tokens)
    /// * `Err(RefreshError::RefreshTokenExpired)` - Expired between validation and reissue
    /// * `Err(RefreshError::GenerationFailed)` - Signing the new pair failed
    pub fn refresh_tokens(&self, refresh_token: &str) -> Result<TokenPair, RefreshError> {
        let claims = self
            .validate_refresh_token(refresh_token)
            .map_err(RefreshError::InvalidRefreshToken)?;

        if claims.is_expired_at(self.clock.now()) {
            return Err(RefreshError::RefreshTokenExpired(TokenError::Expired));
        }

        self.generate_tokens(&claims.to_user())
            .map_err(RefreshError::GenerationFailed)
    }
}
