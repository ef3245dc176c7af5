/*!
 * Authentication Handler Types
 *
 * Request and response bodies shared by the register, login, logout and
 * current-user handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::PublicUser;
use crate::backend::middleware::Identity;

/// Registration request
///
/// Fields are optional at the parsing stage so a missing field produces the
/// same 400 as an empty one.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Returned by register and login
///
/// The token itself is only sent as a cookie, never in the body.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Plain acknowledgement body
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Returned by GET /api/auth/user
#[derive(Serialize, Deserialize, Debug)]
pub struct CurrentUserResponse {
    pub user: Identity,
}

/// Treat an absent and an empty field alike
pub(crate) fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
