/*!
 * In-Memory Store
 *
 * Process-local implementation of `UserStore` and `CampaignStore`. Data is
 * lost on restart. Ids are assigned sequentially from 1, like a `SERIAL`
 * column.
 */

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::campaigns::model::{Campaign, CampaignFields};
use crate::backend::store::{CampaignStore, StoreError, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    campaigns: BTreeMap<i32, Campaign>,
    next_campaign_id: i32,
}

/// Store that keeps all rows in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.email == email || u.username == username)
            .cloned())
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        // Same guarantee as the unique indexes in PostgreSQL.
        if tables
            .users
            .iter()
            .any(|u| u.email == new_user.email || u.username == new_user.username)
        {
            return Err(StoreError::Conflict);
        }

        let user = User {
            id: tables.users.len() as i32 + 1,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl CampaignStore for MemoryStore {
    async fn list_campaigns(&self, owner_id: i32) -> Result<Vec<Campaign>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .campaigns
            .values()
            .rev()
            .filter(|c| c.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_campaign(&self, id: i32, owner_id: i32) -> Result<Option<Campaign>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .campaigns
            .get(&id)
            .filter(|c| c.user_id == owner_id)
            .cloned())
    }

    async fn insert_campaign(
        &self,
        owner_id: i32,
        fields: CampaignFields,
    ) -> Result<Campaign, StoreError> {
        let mut tables = self.tables.write().await;
        tables.next_campaign_id += 1;

        let campaign = Campaign {
            id: tables.next_campaign_id,
            user_id: owner_id,
            name: fields.name,
            budget: fields.budget,
            status: fields.status,
            created_at: Utc::now(),
        };
        tables.campaigns.insert(campaign.id, campaign.clone());
        Ok(campaign)
    }

    async fn update_campaign(
        &self,
        id: i32,
        owner_id: i32,
        fields: CampaignFields,
    ) -> Result<Option<Campaign>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(campaign) = tables
            .campaigns
            .get_mut(&id)
            .filter(|c| c.user_id == owner_id)
        else {
            return Ok(None);
        };

        campaign.name = fields.name;
        campaign.budget = fields.budget;
        campaign.status = fields.status;
        Ok(Some(campaign.clone()))
    }

    async fn delete_campaign(&self, id: i32, owner_id: i32) -> Result<Option<Campaign>, StoreError> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .campaigns
            .get(&id)
            .is_some_and(|c| c.user_id == owner_id);
        if !owned {
            return Ok(None);
        }
        Ok(tables.campaigns.remove(&id))
    }
}
