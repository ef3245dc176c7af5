//! Backend Error Module
//!
//! This module defines the error types returned by HTTP handlers and their
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation and 404 fallback
//! ```
//!
//! # Error Types
//!
//! - `ValidationError` - missing or malformed input
//! - `ConflictError` - duplicate email or username
//! - `AuthenticationError` - bad credentials or rejected token
//! - `NotFound` - unknown or foreign campaign, unknown route
//! - `InternalError` - store, hashing or signing failure
//!
//! Component errors (`StoreError`, `PasswordError`, `TokenError`) convert into
//! `BackendError` with `?`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{json_body, not_found, INVALID_BODY};
pub use types::{BackendError, ALREADY_IN_USE, INCORRECT_CREDENTIALS, SERVER_ERROR};
