//! Server Module
//!
//! This module contains the code for configuring and initializing the Axum
//! HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading and validation
//! - **`init`** - Store selection and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (secret, database, CORS)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env()` fails fast on a
//!    missing `JWT_SECRET`
//! 2. **Store Selection**: PostgreSQL when configured, in-memory otherwise
//! 3. **State Creation**: session keys, password hasher, cookie policy
//! 4. **Router Creation**: routes, authorization gate, cookies, tracing, CORS
//!
//! # Example
//!
//! ```rust,no_run
//! use campaign_manager::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
