//! Session Token Codec
//!
//! Stateless bearer credential binding a user id to an expiry.
//!
//! Format: `base64url(claims json) "." base64url(HMAC-SHA256(secret, first segment))`
//!
//! A token is valid iff its signature verifies under the server secret and
//! its expiry lies in the future. Signature is always checked first.

use chrono::{DateTime, TimeZone, Utc};
use kernel::id::UserId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed, undecodable or signed with another secret
    #[error("token is invalid")]
    Invalid,

    /// Authentic but past its expiry
    #[error("token has expired")]
    Expired,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    iat: i64,
    exp: i64,
}

/// A freshly issued token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// HMAC token issuer and verifier
#[derive(Clone)]
pub struct TokenCodec {
    secret: [u8; 32],
    ttl_secs: i64,
}

impl TokenCodec {
    pub fn new(secret: [u8; 32], ttl_secs: u64) -> Self {
        Self {
            secret,
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_secret, config.token_ttl_secs())
    }

    /// Issue a token for `user_id` valid for the configured TTL
    pub fn issue(&self, user_id: &UserId) -> AuthResult<IssuedToken> {
        self.issue_at(user_id, Utc::now())
    }

    pub fn issue_at(&self, user_id: &UserId, now: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let iat = now.timestamp();
        let exp = iat.saturating_add(self.ttl_secs);
        let claims = Claims {
            sub: *user_id.as_uuid(),
            iat,
            exp,
        };

        let json = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("token claims: {e}")))?;
        let payload = to_base64url(&json);
        let signature = to_base64url(&hmac_sha256(&self.secret, payload.as_bytes()));

        let expires_at = Utc
            .timestamp_opt(exp, 0)
            .single()
            .ok_or_else(|| AuthError::Internal("token expiry out of range".into()))?;

        Ok(IssuedToken {
            token: format!("{payload}.{signature}"),
            expires_at,
        })
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, TokenError> {
        let (payload, signature) = token.split_once('.').ok_or(TokenError::Invalid)?;
        if payload.is_empty() || signature.contains('.') {
            return Err(TokenError::Invalid);
        }

        let signature = from_base64url(signature).map_err(|_| TokenError::Invalid)?;
        if !verify_hmac_sha256(&self.secret, payload.as_bytes(), &signature) {
            return Err(TokenError::Invalid);
        }

        let json = from_base64url(payload).map_err(|_| TokenError::Invalid)?;
        let claims: Claims = serde_json::from_slice(&json).map_err(|_| TokenError::Invalid)?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(UserId::from_uuid(claims.sub))
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("secret", &"[REDACTED]")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}
