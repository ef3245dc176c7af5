/*!
 * Logout Handler
 *
 * POST /api/auth/logout
 *
 * Tells the browser to drop the session cookie. There is no server-side
 * session to destroy: a copy of the token kept elsewhere stays valid until it
 * expires.
 */

use axum::{extract::State, response::Json};
use tower_cookies::Cookies;

use crate::backend::auth::cookies::removal_cookie;
use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::server::state::AppState;

/// Logout handler. Always succeeds.
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> Json<MessageResponse> {
    cookies.add(removal_cookie(state.secure_cookies));

    Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    })
}
