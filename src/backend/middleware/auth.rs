/*!
 * Authorization Gate
 *
 * Middleware for routes that require a session. It takes the token from the
 * `token` cookie, falling back to an `Authorization: Bearer <token>` header,
 * verifies it, and attaches the recovered identity to the request.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use crate::backend::auth::cookies::SESSION_COOKIE;
use crate::backend::auth::sessions::{Claims, SessionKeys};
use crate::backend::error::BackendError;

/// Message for requests without any token
pub const MISSING_TOKEN: &str = "Unauthorized - missing token";

/// Message for requests whose token fails verification (bad or expired)
pub const INVALID_TOKEN: &str = "Unauthorized - invalid token";

/// Identity recovered from a verified session token
///
/// Lives in the request extensions for the duration of one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i32,
    pub username: String,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
        }
    }
}

/// Find the session token: cookie first, then the bearer header
///
/// Empty values count as absent.
pub fn extract_token(session_cookie: Option<&str>, headers: &HeaderMap) -> Option<String> {
    match session_cookie {
        Some(token) if !token.is_empty() => Some(token.to_string()),
        _ => bearer_token(headers),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `token` cookie or the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches an [`Identity`] to request extensions for use in handlers
///
/// Returns 401 if the token is missing or fails verification. Invalid and
/// expired tokens get the same response; the cause is only logged.
pub async fn require_auth(
    State(sessions): State<SessionKeys>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let cookie = cookies.get(SESSION_COOKIE);
    let token = extract_token(cookie.as_ref().map(|c| c.value()), request.headers()).ok_or_else(|| {
        tracing::warn!("Missing session token for {}", request.uri().path());
        BackendError::unauthorized(MISSING_TOKEN)
    })?;

    let claims = sessions.verify(&token).map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    request.extensions_mut().insert(Identity::from(claims));

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated identity
///
/// Only usable on routes behind [`require_auth`]; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts.extensions.get::<Identity>().cloned().ok_or_else(|| {
            tracing::warn!("Identity not found in request extensions");
            BackendError::unauthorized(MISSING_TOKEN)
        })?;

        Ok(AuthUser(identity))
    }
}
