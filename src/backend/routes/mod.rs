//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - API endpoints (auth, campaigns)
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - User login
//! - `POST /api/auth/logout` - User logout
//!
//! ## Protected
//!
//! - `GET /api/auth/user` - Current user
//! - `GET /api/campaigns`, `POST /api/campaigns`
//! - `GET /api/campaigns/{id}`, `PUT /api/campaigns/{id}`, `DELETE /api/campaigns/{id}`
//!
//! Anything else answers `404 {"error": "Route not found", "status": 404}`.

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
