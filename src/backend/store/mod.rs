//! Store Module
//!
//! Persistence for users and campaigns behind two async traits, so handlers
//! never depend on a concrete database.
//!
//! # Implementations
//!
//! - **`postgres`** - [`PgStore`], sqlx over a PostgreSQL pool. The unique
//!   indexes on `users.email` and `users.username` are the source of truth
//!   for registration uniqueness.
//! - **`memory`** - [`MemoryStore`], tables behind a `tokio::sync::RwLock`.
//!   Used when no database is configured and throughout the test-suite.
//!   Enforces the same uniqueness rules on insert.
//!
//! # Ownership
//!
//! Every [`CampaignStore`] operation takes the owner's user id and only ever
//! touches rows belonging to that owner. A campaign owned by someone else is
//! reported exactly like a missing one (`None`).

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::campaigns::model::{Campaign, CampaignFields};

/// PostgreSQL-backed store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("unique constraint violated")]
    Conflict,

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Credential store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by login email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up any user holding either the email or the username
    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, StoreError>;

    /// Insert a user, failing with [`StoreError::Conflict`] on a duplicate
    /// email or username
    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError>;
}

/// Owner-scoped campaign store
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// All campaigns of an owner, highest id first
    async fn list_campaigns(&self, owner_id: i32) -> Result<Vec<Campaign>, StoreError>;

    async fn find_campaign(&self, id: i32, owner_id: i32) -> Result<Option<Campaign>, StoreError>;

    async fn insert_campaign(
        &self,
        owner_id: i32,
        fields: CampaignFields,
    ) -> Result<Campaign, StoreError>;

    /// Overwrite a campaign's fields; `None` if it does not exist for this owner
    async fn update_campaign(
        &self,
        id: i32,
        owner_id: i32,
        fields: CampaignFields,
    ) -> Result<Option<Campaign>, StoreError>;

    /// Delete and return a campaign; `None` if it does not exist for this owner
    async fn delete_campaign(&self, id: i32, owner_id: i32) -> Result<Option<Campaign>, StoreError>;
}
