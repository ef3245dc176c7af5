//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration
//! ├── login.rs     - User authentication
//! ├── logout.rs    - Session cookie removal
//! └── me.rs        - Current user
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`logout`** - POST /api/auth/logout
//! - **`current_user`** - GET /api/auth/user (behind the authorization gate)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, CurrentUserResponse, LoginRequest, MessageResponse, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::current_user;
pub use register::register;
