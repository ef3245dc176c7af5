//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - The authorization gate for protected routes, plus the
//!   [`AuthUser`] extractor handlers use to read the verified identity
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use campaign_manager::backend::middleware::{require_auth, AuthUser};
//! use campaign_manager::backend::AppState;
//!
//! async fn whoami(AuthUser(identity): AuthUser) -> String {
//!     identity.username
//! }
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/whoami", get(whoami))
//!         .route_layer(from_fn_with_state(state, require_auth))
//! }
//! ```

pub mod auth;

pub use auth::{extract_token, require_auth, AuthUser, Identity, INVALID_TOKEN, MISSING_TOKEN};
