use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        revenue::{MonthlyRevenueDto, RevenueFilterDto, RoomTypeRevenueDto, TotalRevenueDto},
    },
    server::{
        controller::param::MonthYearParam, error::AppError, service::revenue::RevenueService,
        state::AppState,
    },
};

/// Tag for grouping revenue endpoints in OpenAPI documentation
pub static REVENUE_TAG: &str = "revenue";

/// Total revenue over confirmed and completed bookings.
#[utoipa::path(
    get,
    path = "/api/revenue/total",
    tag = REVENUE_TAG,
    responses(
        (status = 200, description = "Total revenue", body = TotalRevenueDto)
    ),
)]
pub async fn get_total_revenue(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let total_revenue = RevenueService::new(&state.db).total().await?;

    Ok((StatusCode::OK, Json(TotalRevenueDto { total_revenue })))
}

/// Revenue per check-in month, oldest first.
#[utoipa::path(
    get,
    path = "/api/revenue/monthly",
    tag = REVENUE_TAG,
    responses(
        (status = 200, description = "Monthly revenue", body = Vec<MonthlyRevenueDto>)
    ),
)]
pub async fn get_monthly_revenue(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let months = RevenueService::new(&state.db).monthly().await?;

    Ok((StatusCode::OK, Json(months)))
}

/// Revenue for one month. Both month and year are required here.
#[utoipa::path(
    get,
    path = "/api/revenue/filter",
    tag = REVENUE_TAG,
    params(
        ("month" = u32, Query, description = "Month 1-12"),
        ("year" = i32, Query, description = "Calendar year")
    ),
    responses(
        (status = 200, description = "Revenue for the month", body = RevenueFilterDto),
        (status = 400, description = "Missing or invalid month/year", body = ErrorDto)
    ),
)]
pub async fn filter_revenue(
    State(state): State<AppState>,
    Query(params): Query<MonthYearParam>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(month), Some(year)) = (params.month, params.year) else {
        return Err(AppError::BadRequest(
            "month and year parameters are required".to_string(),
        ));
    };

    let total_revenue = RevenueService::new(&state.db).for_month(month, year).await?;

    Ok((
        StatusCode::OK,
        Json(RevenueFilterDto {
            month,
            year,
            total_revenue,
        }),
    ))
}

/// Revenue and booking counts per room type.
#[utoipa::path(
    get,
    path = "/api/revenue/by-room-type",
    tag = REVENUE_TAG,
    responses(
        (status = 200, description = "Per-room-type revenue", body = Vec<RoomTypeRevenueDto>)
    ),
)]
pub async fn get_revenue_by_room_type(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let breakdown = RevenueService::new(&state.db).by_room_type().await?;

    Ok((StatusCode::OK, Json(breakdown)))
}
