/*!
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Require username, email and password
 * 2. Check whether the email or username is already taken
 * 3. Hash the password with bcrypt
 * 4. Insert the user
 * 5. Issue a session token and set it as the `token` cookie
 * 6. Return 201 with the public user
 *
 * The uniqueness check in step 2 only exists for a friendly early answer. Two
 * concurrent registrations can both pass it; the store's unique constraint
 * then rejects the second insert, which maps to the same 400.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use tower_cookies::Cookies;

use crate::backend::auth::cookies::session_cookie;
use crate::backend::auth::handlers::types::{required, AuthResponse, RegisterRequest};
use crate::backend::auth::users::{NewUser, PublicUser};
use crate::backend::error::{json_body, BackendError, ALREADY_IN_USE};
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - A field is missing, the body is malformed, or the
///   email/username is taken
/// * `500 Internal Server Error` - Store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "email": "alice@x.com", "password": "secret1"}
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "User created successfully",
///   "user": {"id": 1, "username": "alice", "email": "alice@x.com"}
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    cookies: Cookies,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let request = json_body(body)?;

    let (Some(username), Some(email), Some(password)) = (
        required(request.username),
        required(request.email),
        required(request.password),
    ) else {
        tracing::warn!("Registration rejected: missing fields");
        return Err(BackendError::validation("All fields are required"));
    };

    tracing::info!("Register request for username: {}, email: {}", username, email);

    if state
        .users
        .find_by_email_or_username(&email, &username)
        .await?
        .is_some()
    {
        tracing::warn!("Email or username already in use: {} / {}", email, username);
        return Err(BackendError::conflict(ALREADY_IN_USE));
    }

    let password_hash = state.hasher.hash(&password).await?;

    let user = state
        .users
        .insert_user(NewUser {
            username,
            email,
            password_hash,
        })
        .await?;

    let token = state.sessions.issue(user.id, &user.username)?;
    cookies.add(session_cookie(token, state.secure_cookies));

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            user: PublicUser::from(&user),
        }),
    ))
}
