/*!
 * Campaign Model
 *
 * Campaign records, their status values, and validation of client input.
 */

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::error::BackendError;

/// Lifecycle status of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Pending,
    Active,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown campaign status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for CampaignStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for CampaignStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Campaign record as stored and returned to its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Campaign {
    /// Unique campaign ID, assigned by the store
    pub id: i32,
    /// Owning user
    pub user_id: i32,
    pub name: String,
    pub budget: f64,
    #[sqlx(try_from = "String")]
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated, writable campaign fields
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignFields {
    pub name: String,
    pub budget: f64,
    pub status: CampaignStatus,
}

/// Budget as sent by clients
///
/// Browser forms submit numeric inputs as strings, so both shapes are accepted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BudgetInput {
    Number(f64),
    Text(String),
}

/// Create/update request body
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CampaignRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub budget: Option<BudgetInput>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CampaignRequest {
    /// Validate the request into writable fields
    ///
    /// All three fields are required. The name must be non-blank, the budget
    /// a positive finite number, and the status one of the known values.
    pub fn validate(self) -> Result<CampaignFields, BackendError> {
        let name = self
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        let (Some(name), Some(budget), Some(status)) = (name, self.budget, self.status) else {
            return Err(BackendError::validation("All fields are required"));
        };

        let budget = match budget {
            BudgetInput::Number(value) => value,
            BudgetInput::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| BackendError::validation("Budget must be a number"))?,
        };
        if !budget.is_finite() || budget <= 0.0 {
            return Err(BackendError::validation("Budget must be greater than zero"));
        }

        let status = status
            .parse::<CampaignStatus>()
            .map_err(|e| BackendError::validation(format!("Invalid status: {}", e.0)))?;

        Ok(CampaignFields {
            name,
            budget,
            status,
        })
    }
}

/// Response for DELETE /api/campaigns/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteCampaignResponse {
    pub message: String,
    pub campaign: Campaign,
}
