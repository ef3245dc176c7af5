/*!
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * From the outside in:
 * 1. `TraceLayer` logs every request
 * 2. `CookieManagerLayer` parses request cookies and writes `Set-Cookie`
 * 3. Routes, with the authorization gate on protected ones
 * 4. Fallback handler returning a JSON 404
 */

use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::not_found;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the stores and session keys
///
/// # Returns
///
/// Configured Axum Router ready to serve requests. CORS is added by the
/// caller since it depends on configuration.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
