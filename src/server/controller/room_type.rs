use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::room::{CreateRoomTypeDto, RoomTypeDto},
    server::{
        data::room_type::RoomTypeRepository,
        error::AppError,
        middleware::auth::{AuthGuard, STAFF_ROLES},
        state::AppState,
    },
};

/// GET /api/room-types
/// List room types with their default nightly prices.
pub async fn get_room_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let room_types = RoomTypeRepository::new(&state.db).get_all().await?;

    let dtos: Vec<RoomTypeDto> = room_types
        .into_iter()
        .map(RoomTypeDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/room-types
/// Create a room type (admin/staff).
pub async fn create_room_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateRoomTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Room type name is required".to_string(),
        ));
    }

    let room_type = RoomTypeRepository::new(&state.db)
        .create(dto.name, dto.price_per_night)
        .await?;

    Ok((StatusCode::CREATED, Json(RoomTypeDto::from_entity(room_type))))
}
