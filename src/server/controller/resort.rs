use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        resort::{CreateResortDto, ResortDto, UpdateResortDto},
    },
    server::{
        data::resort::ResortRepository,
        error::AppError,
        middleware::auth::{AuthGuard, STAFF_ROLES},
        state::AppState,
    },
};

/// Tag for grouping resort endpoints in OpenAPI documentation
pub static RESORT_TAG: &str = "resorts";

/// Get all resorts.
#[utoipa::path(
    get,
    path = "/api/resorts",
    tag = RESORT_TAG,
    responses(
        (status = 200, description = "Resorts", body = Vec<ResortDto>)
    ),
)]
pub async fn get_resorts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let resorts = ResortRepository::new(&state.db).get_all().await?;

    let dtos: Vec<ResortDto> = resorts.into_iter().map(ResortDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one resort.
#[utoipa::path(
    get,
    path = "/api/resorts/{id}",
    tag = RESORT_TAG,
    params(
        ("id" = i32, Path, description = "Resort id")
    ),
    responses(
        (status = 200, description = "Resort", body = ResortDto),
        (status = 404, description = "Resort not found", body = ErrorDto)
    ),
)]
pub async fn get_resort(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let resort = ResortRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resort not found".to_string()))?;

    Ok((StatusCode::OK, Json(ResortDto::from_entity(resort))))
}

/// Create a resort (admin/staff).
#[utoipa::path(
    post,
    path = "/api/resorts",
    tag = RESORT_TAG,
    request_body = CreateResortDto,
    responses(
        (status = 201, description = "Resort created", body = ResortDto),
        (status = 400, description = "Missing name", body = ErrorDto)
    ),
)]
pub async fn create_resort(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateResortDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest("Resort name is required".to_string()));
    }

    let resort = ResortRepository::new(&state.db).create(dto.name).await?;

    Ok((StatusCode::CREATED, Json(ResortDto::from_entity(resort))))
}

/// Rename a resort (admin/staff).
#[utoipa::path(
    put,
    path = "/api/resorts/{id}",
    tag = RESORT_TAG,
    params(
        ("id" = i32, Path, description = "Resort id")
    ),
    request_body = UpdateResortDto,
    responses(
        (status = 200, description = "Resort updated", body = ResortDto),
        (status = 404, description = "Resort not found", body = ErrorDto)
    ),
)]
pub async fn update_resort(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateResortDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest("Resort name is required".to_string()));
    }

    let resort = ResortRepository::new(&state.db)
        .update(id, dto.name)
        .await?
        .ok_or_else(|| AppError::NotFound("Resort not found".to_string()))?;

    Ok((StatusCode::OK, Json(ResortDto::from_entity(resort))))
}

/// Delete a resort (admin/staff). Blocked while rooms still reference it.
#[utoipa::path(
    delete,
    path = "/api/resorts/{id}",
    tag = RESORT_TAG,
    params(
        ("id" = i32, Path, description = "Resort id")
    ),
    responses(
        (status = 200, description = "Resort deleted", body = MessageDto),
        (status = 404, description = "Resort not found", body = ErrorDto),
        (status = 409, description = "Resort still has rooms", body = ErrorDto)
    ),
)]
pub async fn delete_resort(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let repo = ResortRepository::new(&state.db);

    if repo.has_rooms(id).await? {
        return Err(AppError::Conflict(
            "Resort still has rooms; delete or move them first".to_string(),
        ));
    }

    if !repo.delete(id).await? {
        return Err(AppError::NotFound("Resort not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Resort deleted successfully".to_string(),
        }),
    ))
}
