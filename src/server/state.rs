//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool (clones share the pool)
//! and `AuthConfig` is a small owned struct.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::config::Config;

/// Settings the bearer-token auth guard needs on every request.
#[derive(Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify HS256 bearer tokens.
    pub jwt_secret: String,
    /// When true the guard skips verification entirely and injects a fixed
    /// admin identity. Development stand-in only, never a production setting.
    pub test_mode: bool,
    /// The user id injected in test mode.
    pub test_user_id: Uuid,
}

impl AuthConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            test_mode: config.auth_test_mode,
            test_user_id: config.auth_test_user_id,
        }
    }
}

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Authentication settings used by the request guard.
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auth: AuthConfig) -> Self {
        Self { db, auth }
    }
}
