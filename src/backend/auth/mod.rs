//! Authentication Module
//!
//! This module handles user registration, login, logout and session tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User record and public projection
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - JWT issuance and verification
//! - **`cookies`** - The `token` session cookie
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── cookies.rs      - Session cookie construction
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email, password → user created → token cookie set
//! 2. **Login**: email, password → credentials verified → token cookie set
//! 3. **Protected request**: token from cookie (or `Authorization: Bearer`) →
//!    verified by the gate → identity attached to the request
//! 4. **Logout**: token cookie cleared on the client
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (work factor 10 by default)
//! - Tokens are HS256 JWTs valid for 24 hours
//! - The session cookie is HttpOnly and SameSite=Lax, Secure in production
//! - Tokens are not revocable: logout only clears the cookie

/// User model
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Session cookie
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{current_user, login, logout, register};
pub use password::{PasswordError, PasswordHasher};
pub use sessions::{Claims, SessionKeys, TokenError, SESSION_TTL_SECS};
pub use users::{NewUser, PublicUser, User};
