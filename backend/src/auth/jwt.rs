//! Signed access tokens
//!
//! Tokens are compact HS256 JWTs. A token is valid if and only if its
//! signature matches the configured secret and the current time is strictly
//! before its `exp` claim. There is no revocation list and no refresh token:
//! a leaked token stays usable until it expires.

use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rahi_shared::{AuthError, ADMIN_ROLE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Arbitrary claim set carried by a token
pub type ClaimsMap = Map<String, Value>;

/// Claims minted for the administrator on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Subject (admin username)
    pub sub: String,
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed HMAC keys
/// These are derived once from the secret and shared across clones
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token issuer and verifier
///
/// Call [`TokenService::new`] once at startup and store it in
/// [`crate::state::AppState`]; clones share the keys.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    validation: Arc<Validation>,
    default_ttl_minutes: i64,
}

impl TokenService {
    pub fn new(secret: &str, default_ttl_minutes: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            keys: JwtKeys::new(secret),
            validation: Arc::new(validation),
            default_ttl_minutes,
        }
    }

    /// Sign `claims` with an `exp` of now + `ttl_minutes`
    ///
    /// Any `exp` already present in `claims` is replaced.
    pub fn issue(&self, claims: &ClaimsMap, ttl_minutes: i64) -> Result<String> {
        let ttl = Duration::try_minutes(ttl_minutes)
            .ok_or_else(|| anyhow!("Token TTL out of range: {} minutes", ttl_minutes))?;
        let exp = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| anyhow!("Token expiry out of range"))?;

        let mut claims = claims.clone();
        claims.insert("exp".to_string(), Value::from(exp.timestamp()));

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow!("Failed to sign token: {}", e))
    }

    /// Check signature and expiry, returning the embedded claims
    ///
    /// Every failure is reported as [`AuthError::InvalidToken`].
    pub fn verify(&self, token: &str) -> Result<ClaimsMap, AuthError> {
        let claims = decode::<ClaimsMap>(token, self.keys.decoding(), &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Token rejected");
                AuthError::InvalidToken
            })?
            .claims;

        let exp = claims
            .get("exp")
            .and_then(Value::as_i64)
            .ok_or(AuthError::InvalidToken)?;
        if Utc::now().timestamp() >= exp {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    /// Mint an admin token with the configured default lifetime
    pub fn issue_admin_token(&self, username: &str) -> Result<String> {
        let mut claims = ClaimsMap::new();
        claims.insert("sub".to_string(), Value::from(username));
        claims.insert("role".to_string(), Value::from(ADMIN_ROLE));
        self.issue(&claims, self.default_ttl_minutes)
    }

    /// Verify a token and require it to carry the admin role
    pub fn verify_admin_token(&self, token: &str) -> Result<AdminClaims, AuthError> {
        let claims = self.verify(token)?;
        let claims: AdminClaims =
            serde_json::from_value(Value::Object(claims)).map_err(|_| AuthError::InvalidToken)?;

        if claims.role != ADMIN_ROLE {
            return Err(AuthError::InvalidToken);
        }
        Ok(claims)
    }

    #[inline]
    pub fn default_ttl_minutes(&self) -> i64 {
        self.default_ttl_minutes
    }
}
