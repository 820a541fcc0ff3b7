use uuid::Uuid;

use crate::server::error::{config::ConfigError, AppError};

/// Identity injected by the auth guard when AUTH_TEST_MODE is enabled.
const DEFAULT_TEST_USER_ID: &str = "3d806f0d-4b36-4d70-9d00-aff58cd2a1d1";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub jwt_secret: String,
    pub auth_test_mode: bool,
    pub auth_test_user_id: Uuid,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let test_user_id =
            std::env::var("AUTH_TEST_USER_ID").unwrap_or_else(|_| DEFAULT_TEST_USER_ID.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: port
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            auth_test_mode: std::env::var("AUTH_TEST_MODE")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
            auth_test_user_id: test_user_id
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("AUTH_TEST_USER_ID".to_string()))?,
        })
    }
}
