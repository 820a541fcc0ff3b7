//! Bearer-token authentication guard.
//!
//! Handlers construct an `AuthGuard` and call `require` with the roles
//! allowed on the route. The guard decodes the `Authorization: Bearer` token,
//! re-checks the account against the database, and enforces the role list.
//!
//! When `AUTH_TEST_MODE` is enabled the guard skips verification entirely and
//! injects a fixed admin identity. This mirrors the mocked authorize
//! middleware the platform has always shipped for local testing and is a
//! development stand-in, never a production setting.

use axum::http::{header, HeaderMap};
use entity::user::UserRole;
use jsonwebtoken::{decode, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    state::AuthConfig,
};

/// Roles allowed on the administrative surfaces of the API.
pub const STAFF_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Manager, UserRole::Staff];

/// Claims carried by the signed bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: Uuid,
    pub username: String,
    pub role: UserRole,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Identity of the authenticated caller, attached to the request after the
/// guard has run.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthConfig,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthConfig) -> Self {
        Self { db, auth }
    }

    /// Authenticates the request and checks the caller's role.
    ///
    /// An empty `allowed` slice admits any authenticated user. The role is
    /// read from the database rather than the token so role changes take
    /// effect immediately.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - The authenticated caller
    /// - `Err(AppError::AuthErr)` - Missing/invalid token (401) or
    ///   insufficient role (403)
    pub async fn require(
        &self,
        headers: &HeaderMap,
        allowed: &[UserRole],
    ) -> Result<AuthUser, AppError> {
        if self.auth.test_mode {
            tracing::debug!("auth test mode: injecting fixed admin identity");
            return Ok(AuthUser {
                id: self.auth.test_user_id,
                username: "admin_test".to_string(),
                role: UserRole::Admin,
            });
        }

        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.auth.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?
        .claims;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        if !allowed.is_empty() && !allowed.contains(&user.role) {
            return Err(AuthError::AccessDenied(user.id).into());
        }

        Ok(AuthUser {
            id: user.id,
            username: user.username,
            role: user.role,
        })
    }
}
