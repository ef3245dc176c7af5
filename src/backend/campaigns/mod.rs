//! Campaigns Module
//!
//! Owner-scoped campaign management.
//!
//! # Module Structure
//!
//! ```text
//! campaigns/
//! ├── mod.rs       - Module exports
//! ├── model.rs     - Campaign record, status and request validation
//! └── handlers.rs  - CRUD handlers
//! ```
//!
//! # Routes
//!
//! - `GET /api/campaigns` - List own campaigns
//! - `POST /api/campaigns` - Create a campaign
//! - `GET /api/campaigns/{id}` - Fetch one
//! - `PUT /api/campaigns/{id}` - Replace its fields
//! - `DELETE /api/campaigns/{id}` - Delete it

pub mod model;

pub mod handlers;

pub use handlers::{create_campaign, delete_campaign, get_campaign, list_campaigns, update_campaign};
pub use model::{Campaign, CampaignFields, CampaignRequest, CampaignStatus};
