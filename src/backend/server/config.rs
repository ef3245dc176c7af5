/*!
 * Server Configuration
 *
 * This module loads and validates the server configuration from environment
 * variables, with defaults for local development where that is safe.
 *
 * # Configuration Sources
 *
 * | Variable | Default | Meaning |
 * |---|---|---|
 * | `JWT_SECRET` | required | HMAC secret for session tokens |
 * | `PORT` | `3001` | listening port |
 * | `APP_ENV` | unset | `production` turns on `Secure` cookies |
 * | `BCRYPT_COST` | `10` | bcrypt work factor, 4..=31 |
 * | `CORS_ORIGIN` | `http://localhost:3000` | allowed browser origin |
 * | `DATABASE_URL` | unset | PostgreSQL URL, wins over `DB_*` |
 * | `DB_HOST` `DB_PORT` `DB_USER` `DB_PASSWORD` `DB_NAME` | port `5432` | component-wise connection |
 * | `DB_MAX_CONNECTIONS` | `5` | pool size |
 *
 * # Error Handling
 *
 * Unlike optional services, a missing or empty `JWT_SECRET` is fatal: there is
 * no built-in fallback secret. Unparseable values are rejected rather than
 * silently replaced by defaults.
 */

use std::fmt;
use std::str::FromStr;

use axum::http::HeaderValue;
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

use crate::backend::auth::password::PasswordHasher;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingSecret,

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid DATABASE_URL: {0}")]
    InvalidDatabaseUrl(#[source] sqlx::Error),
}

/// Server configuration, built once at startup
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
    /// `APP_ENV=production`
    pub production: bool,
    pub hash_cost: u32,
    pub cors_origin: HeaderValue,
    /// `None` when no database is configured
    pub database: Option<PgConnectOptions>,
    pub max_db_connections: u32,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("production", &self.production)
            .field("hash_cost", &self.hash_cost)
            .field("cors_origin", &self.cors_origin)
            .field("database", &self.database.as_ref().map(|_| "<configured>"))
            .field("max_db_connections", &self.max_db_connections)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value for a variable name, or `None` if unset
    ///
    /// # Errors
    ///
    /// * [`ConfigError::MissingSecret`] - `JWT_SECRET` unset or empty
    /// * [`ConfigError::InvalidValue`] - A numeric value failed to parse, the
    ///   cost is out of range, or the CORS origin is not a valid header value
    /// * [`ConfigError::InvalidDatabaseUrl`] - `DATABASE_URL` failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values behave like unset ones
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingSecret)?;

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;

        let production = get("APP_ENV").is_some_and(|env| env.trim() == "production");

        let hash_cost = parse_or(get("BCRYPT_COST"), "BCRYPT_COST", PasswordHasher::DEFAULT_COST)?;
        if !(MIN_COST..=MAX_COST).contains(&hash_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: hash_cost.to_string(),
            });
        }

        let origin = get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidValue {
            key: "CORS_ORIGIN",
            value: origin.clone(),
        })?;

        let database = match get("DATABASE_URL") {
            Some(url) => Some(
                PgConnectOptions::from_str(&url).map_err(ConfigError::InvalidDatabaseUrl)?,
            ),
            None => database_from_parts(&get)?,
        };

        let max_db_connections = parse_or(
            get("DB_MAX_CONNECTIONS"),
            "DB_MAX_CONNECTIONS",
            DEFAULT_MAX_DB_CONNECTIONS,
        )?;

        Ok(Self {
            port,
            jwt_secret,
            production,
            hash_cost,
            cors_origin,
            database,
            max_db_connections,
        })
    }
}

/// Build connection options from `DB_*` variables
///
/// The database counts as configured when any of `DB_HOST`, `DB_USER` or
/// `DB_NAME` is set.
fn database_from_parts<G>(get: &G) -> Result<Option<PgConnectOptions>, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let host = get("DB_HOST");
    let user = get("DB_USER");
    let name = get("DB_NAME");
    if host.is_none() && user.is_none() && name.is_none() {
        return Ok(None);
    }

    let port = parse_or(get("DB_PORT"), "DB_PORT", DEFAULT_DB_PORT)?;

    let mut options = PgConnectOptions::new()
        .host(host.as_deref().unwrap_or("localhost"))
        .port(port);
    if let Some(user) = &user {
        options = options.username(user);
    }
    if let Some(password) = get("DB_PASSWORD") {
        options = options.password(&password);
    }
    if let Some(name) = &name {
        options = options.database(name);
    }

    Ok(Some(options))
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
