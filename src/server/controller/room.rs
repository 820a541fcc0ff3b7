use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::{ActiveEnum, TransactionTrait};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        room::{CreateRoomDto, RoomCreatedDto, RoomDto, TopBookedRoomDto, UpdateRoomDto},
    },
    server::{
        data::{resort::ResortRepository, room::RoomRepository, room_type::RoomTypeRepository},
        error::AppError,
        middleware::auth::{AuthGuard, STAFF_ROLES},
        model::room::{RoomDetailParams, RoomFilter, RoomParams},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "rooms";

#[derive(Deserialize)]
pub struct RoomListQuery {
    pub resort_id: Option<i32>,
    pub location: Option<String>,
    pub room_type: Option<String>,
}

#[derive(Deserialize)]
pub struct TopBookedQuery {
    #[serde(default = "default_top_limit")]
    pub limit: usize,
}

fn default_top_limit() -> usize {
    5
}

fn parse_room_status(value: Option<String>) -> Result<entity::room::RoomStatus, AppError> {
    match value {
        None => Ok(entity::room::RoomStatus::Available),
        Some(v) => entity::room::RoomStatus::try_from_value(&v)
            .map_err(|_| AppError::BadRequest("Invalid room status".to_string())),
    }
}

/// Builds the joined room view from a set of rooms plus lookup maps for
/// resorts, types and detail rows.
async fn assemble_room_dtos(
    state: &AppState,
    rooms: Vec<entity::room::Model>,
) -> Result<Vec<RoomDto>, AppError> {
    let room_repo = RoomRepository::new(&state.db);

    let resorts: HashMap<i32, String> = ResortRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|r| (r.id, r.name))
        .collect();
    let room_types: HashMap<Uuid, entity::room_type::Model> = RoomTypeRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();
    let details: HashMap<Uuid, entity::room_detail::Model> = room_repo
        .find_details_for_rooms(rooms.iter().map(|r| r.id).collect())
        .await?
        .into_iter()
        .map(|d| (d.room_id, d))
        .collect();

    Ok(rooms
        .into_iter()
        .map(|room| {
            let room_type = room_types.get(&room.room_type_id);
            let detail = details.get(&room.id);
            let default_price = room_type
                .map(|t| t.price_per_night)
                .unwrap_or_default();

            RoomDto {
                id: room.id,
                resort_id: room.resort_id,
                resort_name: resorts.get(&room.resort_id).cloned().unwrap_or_default(),
                room_type_id: room.room_type_id,
                room_type: room_type.map(|t| t.name.clone()).unwrap_or_default(),
                default_price,
                actual_price: detail
                    .and_then(|d| d.price_per_night)
                    .unwrap_or(default_price),
                description: detail.map(|d| d.description.clone()),
                features: detail.map(|d| d.features.clone()),
                images_url: detail.map(|d| d.images_url.clone()),
                status: room.status,
                category: room.category,
                location: room.location,
                address: room.address,
                num_bed: detail.map(|d| d.num_bed.clone()),
                created_at: room.created_at,
                updated_at: room.updated_at,
            }
        })
        .collect())
}

/// Get rooms with optional resort, location and room type filters.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    params(
        ("resort_id" = Option<i32>, Query, description = "Filter by resort"),
        ("location" = Option<String>, Query, description = "Location substring, case-insensitive"),
        ("room_type" = Option<String>, Query, description = "Exact room type name")
    ),
    responses(
        (status = 200, description = "Rooms", body = Vec<RoomDto>)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomRepository::new(&state.db)
        .get_filtered(&RoomFilter {
            resort_id: query.resort_id,
            location: query.location,
            room_type: query.room_type,
        })
        .await?;

    let dtos = assemble_room_dtos(&state, rooms).await?;

    Ok((StatusCode::OK, Json(dtos)))
}

/// Rooms ranked by confirmed bookings.
#[utoipa::path(
    get,
    path = "/api/rooms/top-booked",
    tag = ROOM_TAG,
    params(
        ("limit" = Option<usize>, Query, description = "Number of rooms to return (default 5)")
    ),
    responses(
        (status = 200, description = "Most booked rooms", body = Vec<TopBookedRoomDto>)
    ),
)]
pub async fn get_top_booked_rooms(
    State(state): State<AppState>,
    Query(query): Query<TopBookedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = BookingService::new(&state.db)
        .top_booked_rooms(query.limit)
        .await?;

    Ok((StatusCode::OK, Json(rooms)))
}

/// Get one room with its resort, type and detail.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = Uuid, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    let mut dtos = assemble_room_dtos(&state, vec![room]).await?;
    let dto = dtos.remove(0);

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a room and its detail row (admin/staff).
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomCreatedDto),
        (status = 400, description = "Missing required fields", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.location.trim().is_empty() {
        return Err(AppError::BadRequest(
            "resort_id, room_type_id and location are required".to_string(),
        ));
    }

    let status = parse_room_status(dto.status)?;

    // Room and detail are created together or not at all.
    let txn = state.db.begin().await?;

    let room_repo = RoomRepository::new(&txn);
    let room = room_repo
        .create(RoomParams {
            resort_id: dto.resort_id,
            room_type_id: dto.room_type_id,
            location: dto.location,
            address: dto.address.unwrap_or_default(),
            status,
            category: "standard".to_string(),
        })
        .await?;

    room_repo
        .insert_detail(
            room.id,
            RoomDetailParams {
                description: dto.description.unwrap_or_default(),
                num_bed: dto.num_bed.unwrap_or_default(),
                price_per_night: dto.price_per_night,
            },
        )
        .await?;

    txn.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(RoomCreatedDto {
            message: "Room created successfully".to_string(),
            room_id: room.id,
        }),
    ))
}

/// Update a room and its detail row (admin/staff).
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = Uuid, Path, description = "Room id")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = MessageDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let status = parse_room_status(dto.status)?;

    let txn = state.db.begin().await?;

    let room_repo = RoomRepository::new(&txn);
    let updated = room_repo
        .update(
            id,
            RoomParams {
                resort_id: dto.resort_id,
                room_type_id: dto.room_type_id,
                location: dto.location,
                address: dto.address.unwrap_or_default(),
                status,
                category: "standard".to_string(),
            },
        )
        .await?;

    if updated.is_none() {
        return Err(AppError::NotFound("Room not found".to_string()));
    }

    room_repo
        .upsert_detail(
            id,
            RoomDetailParams {
                description: dto.description.unwrap_or_default(),
                num_bed: dto.num_bed.unwrap_or_default(),
                price_per_night: dto.price_per_night,
            },
        )
        .await?;

    txn.commit().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Room updated successfully".to_string(),
        }),
    ))
}

/// Delete a room (admin/staff). Blocked while bookings reference it; rooms
/// with history should be moved to maintenance instead.
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = Uuid, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room has bookings", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let txn = state.db.begin().await?;

    let room_repo = RoomRepository::new(&txn);

    if room_repo.has_bookings(id).await? {
        return Err(AppError::Conflict(
            "Room has bookings and cannot be deleted; set it to maintenance instead".to_string(),
        ));
    }

    room_repo.delete_detail(id).await?;

    if !room_repo.delete(id).await? {
        return Err(AppError::NotFound("Room not found".to_string()));
    }

    txn.commit().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Room deleted successfully".to_string(),
        }),
    ))
}
