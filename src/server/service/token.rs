//! Signing and verification of HS256 access tokens.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError};

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: i32,
    /// Issued at (Unix timestamp seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp seconds)
    pub exp: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Shared secret and lifetime used to issue and verify tokens.
#[derive(Clone)]
pub struct TokenKeys {
    keys: Arc<Keys>,
    ttl: TimeDelta,
}

impl TokenKeys {
    /// Creates token keys from an HMAC secret and a token lifetime.
    pub fn new(secret: &str, ttl: TimeDelta) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            ttl,
        }
    }

    /// Issues a token for `user_id` valid for the configured lifetime.
    pub fn issue(&self, user_id: i32) -> Result<String, InternalError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(self.ttl)
            .ok_or(InternalError::TokenLifetime(self.ttl))?;

        self.encode(&Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires.timestamp(),
        })
    }

    fn encode(&self, claims: &Claims) -> Result<String, InternalError> {
        jsonwebtoken::encode(&Header::default(), claims, &self.keys.encoding)
            .map_err(InternalError::TokenEncoding)
    }

    /// Verifies signature and expiry, returning the token's claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::ExpiredToken)` - Token signature is valid but `exp` has passed
    /// - `Err(AuthError::InvalidToken)` - Token is malformed or signed with another key
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        jsonwebtoken::decode::<Claims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}
