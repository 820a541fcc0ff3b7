use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::auth::{AuthResponseDto, AuthUserDto, LoginDto, RegisterDto},
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// POST /api/auth/login
/// Verify credentials and issue a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.auth).login(dto).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            message: "Login successful".to_string(),
            token,
            user: AuthUserDto {
                id: user.id,
                username: user.username,
                role: user.role,
            },
        }),
    ))
}

/// POST /api/auth/register
/// Create a guest account and issue a bearer token.
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.auth)
        .register(dto)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            message: "Register successful".to_string(),
            token,
            user: AuthUserDto {
                id: user.id,
                username: user.username,
                role: user.role,
            },
        }),
    ))
}
