/*!
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token and set it as the `token` cookie
 * 4. Return the public user
 *
 * # Security
 *
 * - An unknown email and a wrong password produce the same 400 and message,
 *   and both pay for one bcrypt derivation
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use tower_cookies::Cookies;

use crate::backend::auth::cookies::session_cookie;
use crate::backend::auth::handlers::types::{required, AuthResponse, LoginRequest};
use crate::backend::auth::users::PublicUser;
use crate::backend::error::{json_body, BackendError};
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, malformed body, unknown email or wrong password
/// * `500 Internal Server Error` - Store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "alice@x.com", "password": "secret1"}
/// ```
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let request = json_body(body)?;

    let (Some(email), Some(password)) = (required(request.email), required(request.password))
    else {
        tracing::warn!("Login rejected: missing fields");
        return Err(BackendError::validation("All fields are required"));
    };

    tracing::info!("Login request for: {}", email);

    let Some(user) = state.users.find_by_email(&email).await? else {
        // Same bcrypt cost as a real check, so timing does not reveal the miss
        state.hasher.verify_unknown(&password).await?;
        tracing::warn!("User not found: {}", email);
        return Err(BackendError::invalid_credentials());
    };

    if !state.hasher.verify(&password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(BackendError::invalid_credentials());
    }

    let token = state.sessions.issue(user.id, &user.username)?;
    cookies.add(session_cookie(token, state.secure_cookies));

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        message: "Logged in successfully".to_string(),
        user: PublicUser::from(&user),
    }))
}
