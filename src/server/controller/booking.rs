use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::ActiveEnum;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        booking::{
            AdminBookingDto, BookingCreatedDto, BookingDetailDto, BookingStatusChangedDto,
            BookingStatusSummaryDto, BookingSummaryDto, CreateBookingDto, MyBookingDto, TotalDto,
            UpdateBookingStatusDto,
        },
    },
    server::{
        controller::param::{MonthYearParam, PaginationParam},
        error::AppError,
        middleware::auth::{AuthGuard, STAFF_ROLES},
        model::booking::BookingListFilter,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "bookings";

#[derive(Deserialize)]
pub struct BookingListQuery {
    pub status: Option<String>,
    #[serde(default = "PaginationParam::default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

/// Create a new booking.
///
/// Computes the stay total from the DD/MM/YYYY date range and the nightly
/// rate and inserts the booking with status pending. Payment confirms it
/// later.
///
/// # Returns
/// - `201 Created` - Booking created, returns id, code and total
/// - `400 Bad Request` - Missing fields or unparseable dates
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingCreatedDto),
        (status = 400, description = "Missing or invalid booking information", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let booking = BookingService::new(&state.db)
        .create(
            user.id,
            dto.room_id,
            &dto.check_in,
            &dto.check_out,
            dto.price_per_night,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedDto {
            message: "Booking created successfully".to_string(),
            booking: BookingSummaryDto {
                id: booking.id,
                booking_code: booking.booking_code,
                total_amount: booking.total_amount,
            },
        }),
    ))
}

/// Get the caller's booking history, newest first.
#[utoipa::path(
    get,
    path = "/api/bookings/my-bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Booking history", body = Vec<MyBookingDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_my_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let bookings = BookingService::new(&state.db).my_bookings(user.id).await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Get the total number of bookings.
#[utoipa::path(
    get,
    path = "/api/bookings/total",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Total booking count", body = TotalDto)
    ),
)]
pub async fn get_total_bookings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let total = BookingService::new(&state.db).count_total().await?;

    Ok((StatusCode::OK, Json(TotalDto { total })))
}

/// Count bookings by check-in month. Without both month and year the count
/// covers all bookings.
#[utoipa::path(
    get,
    path = "/api/bookings/filter",
    tag = BOOKING_TAG,
    params(
        ("month" = Option<u32>, Query, description = "Month 1-12"),
        ("year" = Option<i32>, Query, description = "Calendar year")
    ),
    responses(
        (status = 200, description = "Filtered booking count", body = TotalDto),
        (status = 400, description = "Invalid month/year", body = ErrorDto)
    ),
)]
pub async fn filter_bookings(
    State(state): State<AppState>,
    Query(params): Query<MonthYearParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let total = match (params.month, params.year) {
        (Some(month), Some(year)) => service.count_by_month(month, year).await?,
        _ => service.count_total().await?,
    };

    Ok((StatusCode::OK, Json(TotalDto { total })))
}

/// Get one booking with guest, room and resort details.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = Uuid, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking detail", body = BookingDetailDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let detail = BookingService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Cancel a booking (owner only).
///
/// Allowed while the booking is pending or confirmed and less than 24 hours
/// old. Cancelling releases the room back to available.
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("id" = Uuid, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingStatusChangedDto),
        (status = 400, description = "Booking can no longer be cancelled", body = ErrorDto),
        (status = 403, description = "Not the booking owner", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let booking = BookingService::new(&state.db).cancel(user.id, id).await?;

    Ok((
        StatusCode::OK,
        Json(BookingStatusChangedDto {
            message: "Booking cancelled successfully".to_string(),
            booking: BookingStatusSummaryDto {
                id: booking.id,
                status: booking.status,
            },
        }),
    ))
}

/// Update a booking's status (admin/staff).
///
/// Accepts confirmed, cancelled, checked_in or checked_out and applies the
/// matching room status in the same transaction.
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(
        ("id" = Uuid, Path, description = "Booking id")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Status updated", body = BookingStatusChangedDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let booking = BookingService::new(&state.db)
        .update_status(id, &dto.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BookingStatusChangedDto {
            message: "Status updated successfully".to_string(),
            booking: BookingStatusSummaryDto {
                id: booking.id,
                status: booking.status,
            },
        }),
    ))
}

/// Get all bookings (admin/staff) with an optional status filter.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by booking status"),
        ("limit" = Option<u64>, Query, description = "Page size (default 50)"),
        ("offset" = Option<u64>, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Bookings", body = Vec<AdminBookingDto>),
        (status = 400, description = "Invalid status filter", body = ErrorDto)
    ),
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let status = query
        .status
        .map(|s| {
            entity::booking::BookingStatus::try_from_value(&s)
                .map_err(|_| AppError::BadRequest("Invalid status filter".to_string()))
        })
        .transpose()?;

    let bookings = BookingService::new(&state.db)
        .list_all(BookingListFilter {
            status,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}
