use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login failed: unknown username or wrong password. Collapsed into one
    /// variant so the response does not reveal which part was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No `Authorization: Bearer` header on a guarded route.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    #[error("Invalid or expired bearer token")]
    InvalidToken,

    /// The token is valid but its subject no longer exists.
    #[error("User {0} from token not found")]
    UserNotFound(Uuid),

    /// The account exists but has been deactivated.
    #[error("User {0} account is deactivated")]
    AccountDisabled(Uuid),

    /// The caller's role is not allowed on this route.
    #[error("User {0} does not have the required role")]
    AccessDenied(Uuid),
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems map to 401 with a generic message; role failures map to
/// 403. The specific cause is logged at debug level for diagnostics while the
/// client-facing message stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth error: {}", self);

        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken | Self::InvalidToken | Self::UserNotFound(_)
            | Self::AccountDisabled(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
