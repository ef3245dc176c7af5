//! Backend Module
//!
//! This module contains all server-side code for the campaign manager.
//! It provides an Axum HTTP server with cookie-based JWT authentication
//! and owner-scoped campaign management.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, JWT tokens, auth handlers
//! - **`middleware`** - Authorization gate for protected routes
//! - **`campaigns`** - Campaign model and CRUD handlers
//! - **`store`** - Persistence traits with PostgreSQL and in-memory backends
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Authorization gate
//! ├── campaigns/      - Campaign CRUD
//! ├── store/          - PostgreSQL and in-memory stores
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `CookieManagerLayer` parses the `Cookie` header
//! 2. Public routes (register, login, logout) run directly
//! 3. Protected routes pass through `require_auth`, which verifies the
//!    session token and attaches an [`middleware::Identity`] to the request
//! 4. Handlers read the identity through the [`middleware::AuthUser`] extractor
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Validation and authentication
//! failures carry their own message; internal failures are logged in full and
//! reach the client as an opaque `"Server error"`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Campaign management
pub mod campaigns;

/// Credential and campaign persistence
pub mod store;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
