/*!
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The user and campaign stores (trait objects)
 * - Session token keys
 * - Password hasher settings
 * - Whether cookies carry the `Secure` attribute
 *
 * Everything is either immutable after startup or internally synchronized by
 * the store, so the state itself needs no locks.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers and middleware to extract
 * only the part they need, e.g. `State<Arc<dyn CampaignStore>>` or
 * `State<SessionKeys>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::store::{CampaignStore, UserStore};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserStore>,

    /// Campaign store
    pub campaigns: Arc<dyn CampaignStore>,

    /// Signing and verification keys for session tokens
    pub sessions: SessionKeys,

    /// bcrypt settings
    pub hasher: PasswordHasher,

    /// Set `Secure` on session cookies (production only)
    pub secure_cookies: bool,
}

impl AppState {
    /// Build state around a single store serving both users and campaigns
    pub fn new<S>(store: Arc<S>, sessions: SessionKeys, hasher: PasswordHasher, secure_cookies: bool) -> Self
    where
        S: UserStore + CampaignStore + 'static,
    {
        Self {
            users: store.clone(),
            campaigns: store,
            sessions,
            hasher,
            secure_cookies,
        }
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CampaignStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.campaigns.clone()
    }
}

/// Lets the authorization gate take `State<SessionKeys>`
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
