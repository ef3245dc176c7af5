/*!
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/logout` - Clear the session cookie
 *
 * ## Protected (behind `require_auth`)
 * - `GET /api/auth/user` - Current user
 * - `GET|POST /api/campaigns` - List or create campaigns
 * - `GET|PUT|DELETE /api/campaigns/{id}` - Single campaign
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{current_user, login, logout, register};
use crate::backend::campaigns::{
    create_campaign, delete_campaign, get_campaign, list_campaigns, update_campaign,
};
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Public routes are added directly. Protected routes are grouped and wrapped
/// with `route_layer`, so the gate only runs for requests that matched one of
/// them and unknown paths still fall through to the 404 fallback.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the authorization gate
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout));

    let protected = Router::new()
        .route("/api/auth/user", get(current_user))
        .route("/api/campaigns", get(list_campaigns).post(create_campaign))
        .route(
            "/api/campaigns/{id}",
            get(get_campaign).put(update_campaign).delete(delete_campaign),
        )
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    router.merge(public).merge(protected)
}
