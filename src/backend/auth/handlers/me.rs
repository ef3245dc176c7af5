/*!
 * Current User Handler
 *
 * GET /api/auth/user
 *
 * Sits behind the authorization gate and echoes the identity recovered from
 * the session token. No store lookup is made.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::CurrentUserResponse;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {"user": {"id": 1, "username": "alice"}}
/// ```
pub async fn current_user(AuthUser(identity): AuthUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse { user: identity })
}
