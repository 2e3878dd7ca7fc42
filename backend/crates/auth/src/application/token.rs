//! Bearer Token Codec
//!
//! Wire format: `b64url(JSON claims) "." b64url(HMAC-SHA256(secret, b64url(JSON claims)))`,
//! unpadded URL-safe base64 on both halves. Claims are `{id, email, exp}`
//! with `exp` in Unix seconds.
//!
//! Tokens are stateless and deterministic: identical claims under the same
//! secret always encode to the identical string. There is no revocation.

use std::time::Duration;

use chrono::Utc;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Facts carried by a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id
    pub id: String,
    /// Subject email at issue time
    pub email: String,
    /// Expiry, Unix seconds
    pub exp: i64,
}

/// Signs and verifies bearer tokens
#[derive(Clone)]
pub struct TokenCodec {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_secret.clone(), config.token_ttl)
    }

    pub fn encode(&self, claims: &Claims) -> AuthResult<String> {
        let json = serde_json::to_vec(claims)
            .map_err(|e| AuthError::Internal(format!("claims serialization failed: {e}")))?;
        let payload = to_base64url(&json);
        let signature = hmac_sha256(&self.secret, payload.as_bytes())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(format!("{}.{}", payload, to_base64url(&signature)))
    }

    /// Issue a token for a subject, expiring `ttl` from now
    pub fn issue(&self, id: &str, email: &str) -> AuthResult<String> {
        self.issue_at(id, email, Utc::now().timestamp())
    }

    pub fn issue_at(&self, id: &str, email: &str, now: i64) -> AuthResult<String> {
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        self.encode(&Claims {
            id: id.to_string(),
            email: email.to_string(),
            exp: now.saturating_add(ttl),
        })
    }

    pub fn decode(&self, token: &str) -> AuthResult<Claims> {
        self.decode_at(token, Utc::now().timestamp())
    }

    /// Verify `token` as of `now` (Unix seconds)
    ///
    /// The signature is checked before the payload is parsed, so a tampered
    /// payload reports `InvalidSignature` rather than `MalformedToken`.
    pub fn decode_at(&self, token: &str, now: i64) -> AuthResult<Claims> {
        let mut parts = token.split('.');
        let (payload, signature) = match (parts.next(), parts.next(), parts.next()) {
            (Some(payload), Some(signature), None) => (payload, signature),
            _ => return Err(AuthError::MalformedToken),
        };

        let signature = from_base64url(signature).map_err(|_| AuthError::InvalidSignature)?;
        let valid = verify_hmac_sha256(&self.secret, payload.as_bytes(), &signature)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        if !valid {
            return Err(AuthError::InvalidSignature);
        }

        let json = from_base64url(payload).map_err(|_| AuthError::MalformedToken)?;
        let claims: Claims =
            serde_json::from_slice(&json).map_err(|_| AuthError::MalformedToken)?;

        if now > claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
