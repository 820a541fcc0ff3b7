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
        discount::{CreateDiscountDto, DiscountDeletedDto, DiscountDto, UpdateDiscountDto},
    },
    server::{
        data::discount::DiscountRepository,
        error::AppError,
        middleware::auth::{AuthGuard, STAFF_ROLES},
        model::discount::{CreateDiscountParams, UpdateDiscountParams},
        state::AppState,
    },
};

/// Tag for grouping discount endpoints in OpenAPI documentation
pub static DISCOUNT_TAG: &str = "discounts";

#[derive(Deserialize)]
pub struct DiscountListQuery {
    pub status: Option<String>,
}

/// Get all vouchers, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/discounts",
    tag = DISCOUNT_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter: active, inactive or expired")
    ),
    responses(
        (status = 200, description = "Vouchers", body = Vec<DiscountDto>),
        (status = 400, description = "Invalid status filter", body = ErrorDto)
    ),
)]
pub async fn get_discounts(
    State(state): State<AppState>,
    Query(query): Query<DiscountListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = query
        .status
        .map(|s| {
            entity::discount::DiscountStatus::try_from_value(&s)
                .map_err(|_| AppError::BadRequest("Invalid status filter".to_string()))
        })
        .transpose()?;

    let discounts = DiscountRepository::new(&state.db).get_all(status).await?;

    let dtos: Vec<DiscountDto> = discounts.into_iter().map(DiscountDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a voucher (admin/staff).
#[utoipa::path(
    post,
    path = "/api/discounts",
    tag = DISCOUNT_TAG,
    request_body = CreateDiscountDto,
    responses(
        (status = 201, description = "Voucher created", body = DiscountDto),
        (status = 400, description = "Missing required fields or invalid type", body = ErrorDto),
        (status = 409, description = "Code already exists", body = ErrorDto)
    ),
)]
pub async fn create_discount(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateDiscountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.code.trim().is_empty() || dto.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "code, name, discount_type, value and validity dates are required".to_string(),
        ));
    }

    let discount_type = entity::discount::DiscountType::try_from_value(&dto.discount_type)
        .map_err(|_| AppError::BadRequest("Invalid discount type".to_string()))?;

    let repo = DiscountRepository::new(&state.db);

    if repo.find_by_code(&dto.code).await?.is_some() {
        return Err(AppError::Conflict(
            "Discount code already exists".to_string(),
        ));
    }

    let discount = repo
        .create(CreateDiscountParams {
            code: dto.code,
            name: dto.name,
            description: dto.description,
            discount_type,
            value: dto.value,
            valid_from: dto.valid_from,
            valid_until: dto.valid_until,
            usage_limit: dto.usage_limit,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(DiscountDto::from_entity(discount))))
}

/// Update a voucher (admin/staff). Absent fields keep their current value.
#[utoipa::path(
    put,
    path = "/api/discounts/{id}",
    tag = DISCOUNT_TAG,
    params(
        ("id" = Uuid, Path, description = "Voucher id")
    ),
    request_body = UpdateDiscountDto,
    responses(
        (status = 200, description = "Voucher updated", body = DiscountDto),
        (status = 400, description = "Nothing to update or invalid value", body = ErrorDto),
        (status = 404, description = "Voucher not found", body = ErrorDto)
    ),
)]
pub async fn update_discount(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateDiscountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.name.is_none()
        && dto.description.is_none()
        && dto.discount_type.is_none()
        && dto.value.is_none()
        && dto.valid_from.is_none()
        && dto.valid_until.is_none()
        && dto.status.is_none()
        && dto.usage_limit.is_none()
    {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    let discount_type = dto
        .discount_type
        .map(|t| {
            entity::discount::DiscountType::try_from_value(&t)
                .map_err(|_| AppError::BadRequest("Invalid discount type".to_string()))
        })
        .transpose()?;
    let status = dto
        .status
        .map(|s| {
            entity::discount::DiscountStatus::try_from_value(&s)
                .map_err(|_| AppError::BadRequest("Invalid status".to_string()))
        })
        .transpose()?;

    let discount = DiscountRepository::new(&state.db)
        .update(
            id,
            UpdateDiscountParams {
                name: dto.name,
                description: dto.description,
                discount_type,
                value: dto.value,
                valid_from: dto.valid_from,
                valid_until: dto.valid_until,
                status,
                usage_limit: dto.usage_limit,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Discount not found".to_string()))?;

    Ok((StatusCode::OK, Json(DiscountDto::from_entity(discount))))
}

/// Delete a voucher (admin/staff), returning the deleted row.
#[utoipa::path(
    delete,
    path = "/api/discounts/{id}",
    tag = DISCOUNT_TAG,
    params(
        ("id" = Uuid, Path, description = "Voucher id")
    ),
    responses(
        (status = 200, description = "Voucher deleted", body = DiscountDeletedDto),
        (status = 404, description = "Voucher not found", body = ErrorDto)
    ),
)]
pub async fn delete_discount(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let discount = DiscountRepository::new(&state.db)
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Discount not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(DiscountDeletedDto {
            message: "Discount deleted".to_string(),
            deleted: DiscountDto::from_entity(discount),
        }),
    ))
}
