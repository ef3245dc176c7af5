/*!
 * Campaign Handlers
 *
 * CRUD endpoints under /api/campaigns. All of them sit behind the
 * authorization gate and only ever see the caller's own campaigns; a campaign
 * owned by someone else answers 404 exactly like a missing one.
 */

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

use crate::backend::campaigns::model::{Campaign, CampaignRequest, DeleteCampaignResponse};
use crate::backend::error::{json_body, BackendError};
use crate::backend::middleware::AuthUser;
use crate::backend::store::CampaignStore;

const NOT_FOUND: &str = "Campaign not found";

/// Message for a `{id}` segment that is not an integer
pub const INVALID_ID: &str = "Invalid campaign id";

fn campaign_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, BackendError> {
    let Path(id) = id.map_err(|rejection| {
        tracing::warn!("Rejected campaign id: {}", rejection.body_text());
        BackendError::validation(INVALID_ID)
    })?;
    Ok(id)
}

/// GET /api/campaigns
///
/// Returns the caller's campaigns, newest first.
pub async fn list_campaigns(
    State(store): State<Arc<dyn CampaignStore>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<Vec<Campaign>>, BackendError> {
    let campaigns = store.list_campaigns(identity.id).await?;
    tracing::debug!("Listed {} campaigns for user {}", campaigns.len(), identity.id);
    Ok(Json(campaigns))
}

/// GET /api/campaigns/{id}
pub async fn get_campaign(
    State(store): State<Arc<dyn CampaignStore>>,
    AuthUser(identity): AuthUser,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Campaign>, BackendError> {
    let id = campaign_id(id)?;
    store
        .find_campaign(id, identity.id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))
}

/// POST /api/campaigns
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, missing field, non-positive budget
///   or unknown status
///
/// # Example Request
///
/// ```json
/// {"name": "Spring", "budget": 100, "status": "draft"}
/// ```
pub async fn create_campaign(
    State(store): State<Arc<dyn CampaignStore>>,
    AuthUser(identity): AuthUser,
    body: Result<Json<CampaignRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Campaign>), BackendError> {
    let fields = json_body(body)?.validate()?;
    let campaign = store.insert_campaign(identity.id, fields).await?;

    tracing::info!(
        "Campaign created: {} ({}, {}) for user {}",
        campaign.name,
        campaign.id,
        campaign.status,
        identity.id
    );

    Ok((StatusCode::CREATED, Json(campaign)))
}

/// PUT /api/campaigns/{id}
///
/// Replaces name, budget and status. The id and body are validated before the
/// campaign is looked up, so bad input on a missing campaign answers 400.
pub async fn update_campaign(
    State(store): State<Arc<dyn CampaignStore>>,
    AuthUser(identity): AuthUser,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<CampaignRequest>, JsonRejection>,
) -> Result<Json<Campaign>, BackendError> {
    let id = campaign_id(id)?;
    let fields = json_body(body)?.validate()?;

    let campaign = store
        .update_campaign(id, identity.id, fields)
        .await?
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))?;

    tracing::info!(
        "Campaign updated: {} now {} for user {}",
        campaign.id,
        campaign.status,
        identity.id
    );

    Ok(Json(campaign))
}

/// DELETE /api/campaigns/{id}
///
/// # Example Response
///
/// ```json
/// {"message": "Campaign deleted successfully", "campaign": {"id": 4, ...}}
/// ```
pub async fn delete_campaign(
    State(store): State<Arc<dyn CampaignStore>>,
    AuthUser(identity): AuthUser,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteCampaignResponse>, BackendError> {
    let id = campaign_id(id)?;
    let campaign = store
        .delete_campaign(id, identity.id)
        .await?
        .ok_or_else(|| BackendError::not_found(NOT_FOUND))?;

    tracing::info!("Campaign deleted: {} for user {}", campaign.id, identity.id);

    Ok(Json(DeleteCampaignResponse {
        message: "Campaign deleted successfully".to_string(),
        campaign,
    }))
}
