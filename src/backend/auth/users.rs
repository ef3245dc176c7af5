/*!
 * User Model
 *
 * The stored user record and its public projection. Persistence lives in
 * `backend::store`; this module only defines the shapes.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record as stored in the credential store
///
/// Deliberately not `Serialize`: the password hash must never reach a client.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store
    pub id: i32,
    /// Username (unique, case-sensitive)
    pub username: String,
    /// Email address (unique, used as the login identifier)
    pub email: String,
    /// Salted bcrypt hash of the password
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// User information that is safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
