/*!
 * Server Initialization
 *
 * This module builds the application from a loaded [`ServerConfig`]:
 * store selection, application state and the router.
 *
 * # Initialization Process
 *
 * 1. Pick the store: PostgreSQL when a database is configured, otherwise the
 *    in-memory store
 * 2. Run migrations against PostgreSQL
 * 3. Build the application state (session keys, hasher, cookie policy)
 * 4. Create the router and wrap it in CORS
 */

use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, StoreError};

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns [`StoreError::Database`] when a database is configured but the
/// connection pool cannot be opened. Migration failures are only logged:
/// the schema may already be in place.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing campaign manager backend");

    let sessions = SessionKeys::new(config.jwt_secret.as_bytes());
    let hasher = PasswordHasher::new(config.hash_cost);

    let app_state = match &config.database {
        Some(options) => {
            tracing::info!("Connecting to database...");
            let store = PgStore::connect(options.clone(), config.max_db_connections)
                .await
                .inspect_err(|e| tracing::error!("Failed to create database connection pool: {}", e))?;
            tracing::info!("Database connection pool created successfully");

            tracing::info!("Running database migrations...");
            match store.migrate().await {
                Ok(()) => tracing::info!("Database migrations completed successfully"),
                Err(e) => {
                    tracing::error!("Failed to run database migrations: {}", e);
                    tracing::warn!("Continuing without migrations - database might not be up to date");
                }
            }

            AppState::new(Arc::new(store), sessions, hasher, config.production)
        }
        None => {
            tracing::warn!("No database configured. Using in-memory store; data will not survive a restart.");
            AppState::new(Arc::new(MemoryStore::new()), sessions, hasher, config.production)
        }
    };

    if config.production {
        tracing::info!("Production mode: session cookies are Secure");
    }

    let app = create_router(app_state).layer(cors_layer(config));

    tracing::info!("Router configured");

    Ok(app)
}

/// CORS for the single configured browser origin, with credentials
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
