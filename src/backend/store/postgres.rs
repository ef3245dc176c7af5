/*!
 * PostgreSQL Store
 *
 * sqlx implementation of `UserStore` and `CampaignStore`. All queries are
 * parameterized; campaign statements always filter on `user_id`.
 */

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::campaigns::model::{Campaign, CampaignFields};
use crate::backend::store::{CampaignStore, StoreError, UserStore};

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";
const CAMPAIGN_COLUMNS: &str = "id, user_id, name, budget, status, created_at";

/// Store backed by a PostgreSQL connection pool
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool
    ///
    /// # Arguments
    /// * `options` - Connection parameters
    /// * `max_connections` - Pool size
    pub async fn connect(
        options: PgConnectOptions,
        max_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply the embedded migrations from `migrations/`
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }
}

/// Map a write error, turning unique violations into [`StoreError::Conflict`]
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict;
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1 OR username = $2 LIMIT 1"
        ))
        .bind(email)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }
}

#[async_trait]
impl CampaignStore for PgStore {
    async fn list_campaigns(&self, owner_id: i32) -> Result<Vec<Campaign>, StoreError> {
        let campaigns = sqlx::query_as::<_, Campaign>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE user_id = $1 ORDER BY id DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(campaigns)
    }

    async fn find_campaign(&self, id: i32, owner_id: i32) -> Result<Option<Campaign>, StoreError> {
        let campaign = sqlx::query_as::<_, Campaign>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(campaign)
    }

    async fn insert_campaign(
        &self,
        owner_id: i32,
        fields: CampaignFields,
    ) -> Result<Campaign, StoreError> {
        sqlx::query_as::<_, Campaign>(&format!(
            "INSERT INTO campaigns (name, budget, status, user_id) VALUES ($1, $2, $3, $4) \
             RETURNING {CAMPAIGN_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(fields.budget)
        .bind(fields.status.as_str())
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn update_campaign(
        &self,
        id: i32,
        owner_id: i32,
        fields: CampaignFields,
    ) -> Result<Option<Campaign>, StoreError> {
        sqlx::query_as::<_, Campaign>(&format!(
            "UPDATE campaigns SET name = $1, budget = $2, status = $3 \
             WHERE id = $4 AND user_id = $5 RETURNING {CAMPAIGN_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(fields.budget)
        .bind(fields.status.as_str())
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn delete_campaign(&self, id: i32, owner_id: i32) -> Result<Option<Campaign>, StoreError> {
        let campaign = sqlx::query_as::<_, Campaign>(&format!(
            "DELETE FROM campaigns WHERE id = $1 AND user_id = $2 RETURNING {CAMPAIGN_COLUMNS}"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(campaign)
    }
}
