/*!
 * Session Management and JWT Tokens
 *
 * Issues and verifies the signed session token. Tokens are HS256 JWTs with
 * `{id, username, iat, exp}` claims and a fixed 24 hour lifetime. Sessions are
 * stateless: nothing is stored server-side, so a token stays valid until it
 * expires, logout included.
 */

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime in seconds (24 hours)
pub const SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: i32,
    /// Username
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Errors raised by the issuer and verifier
#[derive(Debug, Error)]
pub enum TokenError {
    /// Malformed token or signature mismatch
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// Signature is fine but the token is past its expiry
    #[error("token expired")]
    Expired,

    /// Encoding failed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Signing and verification keys derived from the server secret
///
/// Built once at startup from [`ServerConfig`](crate::backend::server::config::ServerConfig)
/// and shared through the application state.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionKeys {
    /// Create keys from the HMAC secret
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is rejected the second after `exp`.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Create a token for a user, issued now
    ///
    /// # Arguments
    /// * `user_id` - User ID
    /// * `username` - Username
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, username, jsonwebtoken::get_current_timestamp())
    }

    /// Create a token with an explicit issue time (Unix seconds)
    pub fn issue_at(
        &self,
        user_id: i32,
        username: &str,
        issued_at: u64,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            id: user_id,
            username: username.to_string(),
            iat: issued_at,
            exp: issued_at + SESSION_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify and decode a token
    ///
    /// # Returns
    /// Decoded claims, [`TokenError::Expired`] past expiry, or
    /// [`TokenError::Invalid`] for anything else
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })
    }
}
