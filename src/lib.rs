//! Campaign Manager - Main Library
//!
//! Campaign Manager is a small JSON API for managing advertising campaigns.
//! Users register and log in with an email and password, and then create,
//! list, edit and delete their own campaign records (name, budget, status).
//!
//! # Overview
//!
//! This library provides:
//! - Cookie-carried JWT sessions with bcrypt password hashing
//! - An authorization gate for protected routes
//! - Owner-scoped campaign CRUD over PostgreSQL (sqlx)
//! - An in-memory store for development and tests
//!
//! # Module Structure
//!
//! Everything lives under [`backend`]:
//!
//! - **`server`** - Configuration, application state, startup
//! - **`routes`** - Router assembly
//! - **`auth`** - Users, password hashing, JWT sessions, auth handlers
//! - **`middleware`** - The authorization gate
//! - **`campaigns`** - Campaign model and handlers
//! - **`store`** - Credential and campaign stores (PostgreSQL, in-memory)
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use campaign_manager::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Handlers share nothing mutable except the stores, which are `Send + Sync`
//! trait objects behind `Arc`. Password hashing runs on the blocking pool.

/// Backend server-side code
pub mod backend;
