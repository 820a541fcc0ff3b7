use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use sea_orm::ActiveEnum;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        payment::{
            AdminPaymentDto, CreatePaymentDto, InvoiceDto, MyPaymentDto, PaymentCreatedDto,
            PaymentDetailDto, PaymentDto, PaymentStatsDto, PaymentsByMethodDto, RefundRequestDto,
            RefundResponseDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, STAFF_ROLES},
        model::payment::{DateRange, PaymentListFilter},
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payments";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListQuery {
    pub status: Option<String>,
    pub payment_method: Option<String>,
    /// Inclusive range start, "YYYY-MM-DD".
    pub start_date: Option<NaiveDate>,
    /// Inclusive range end, "YYYY-MM-DD".
    pub end_date: Option<NaiveDate>,
    #[serde(default = "PaginationParam::default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> DateRange {
    DateRange {
        start: start.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|d| d.and_utc()),
        end: end
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .map(|d| d.and_utc()),
    }
}

/// Pay a booking.
///
/// Validates the payment method, applies an optional voucher code, settles
/// the payment synchronously and confirms the booking, all in a single
/// transaction.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment completed", body = PaymentCreatedDto),
        (status = 400, description = "Invalid method, amount, or exhausted voucher", body = ErrorDto),
        (status = 404, description = "Booking not found or not owned by caller", body = ErrorDto),
        (status = 409, description = "Booking already paid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let payment = PaymentService::new(&state.db)
        .create(
            user.id,
            dto.booking_id,
            &dto.payment_method,
            dto.amount,
            dto.discount_code.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentCreatedDto {
            message: "Payment completed successfully".to_string(),
            payment: PaymentDto::from_entity(payment),
        }),
    ))
}

/// Get the caller's payment history, newest first.
#[utoipa::path(
    get,
    path = "/api/payments/my-payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Payment history", body = Vec<MyPaymentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_my_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let payments = PaymentService::new(&state.db).my_payments(user.id).await?;

    Ok((StatusCode::OK, Json(payments)))
}

/// Get all payments (admin/staff) with optional status, method and date
/// filters.
#[utoipa::path(
    get,
    path = "/api/payments/list",
    tag = PAYMENT_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by payment status"),
        ("paymentMethod" = Option<String>, Query, description = "Filter by payment method"),
        ("startDate" = Option<String>, Query, description = "Range start, YYYY-MM-DD"),
        ("endDate" = Option<String>, Query, description = "Range end, YYYY-MM-DD"),
        ("limit" = Option<u64>, Query, description = "Page size (default 50)"),
        ("offset" = Option<u64>, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Payments", body = Vec<AdminPaymentDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto)
    ),
)]
pub async fn get_all_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PaymentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let status = query
        .status
        .map(|s| {
            entity::payment::PaymentStatus::try_from_value(&s)
                .map_err(|_| AppError::BadRequest("Invalid status filter".to_string()))
        })
        .transpose()?;
    let payment_method = query
        .payment_method
        .map(|m| {
            entity::payment::PaymentMethod::try_from_value(&m)
                .map_err(|_| AppError::BadRequest("Invalid payment method filter".to_string()))
        })
        .transpose()?;

    let range = date_range(query.start_date, query.end_date);
    let payments = PaymentService::new(&state.db)
        .list_all(PaymentListFilter {
            status,
            payment_method,
            start_date: range.start,
            end_date: range.end,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;

    Ok((StatusCode::OK, Json(payments)))
}

/// Aggregate payment statistics (admin/staff).
#[utoipa::path(
    get,
    path = "/api/payments/stats",
    tag = PAYMENT_TAG,
    params(
        ("startDate" = Option<String>, Query, description = "Range start, YYYY-MM-DD"),
        ("endDate" = Option<String>, Query, description = "Range end, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Payment statistics", body = PaymentStatsDto)
    ),
)]
pub async fn get_payment_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StatsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let stats = PaymentService::new(&state.db)
        .stats(date_range(query.start_date, query.end_date))
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Payment totals grouped by method (admin/staff).
#[utoipa::path(
    get,
    path = "/api/payments/by-method",
    tag = PAYMENT_TAG,
    params(
        ("startDate" = Option<String>, Query, description = "Range start, YYYY-MM-DD"),
        ("endDate" = Option<String>, Query, description = "Range end, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Per-method totals", body = Vec<PaymentsByMethodDto>)
    ),
)]
pub async fn get_payments_by_method(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StatsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let breakdown = PaymentService::new(&state.db)
        .by_method(date_range(query.start_date, query.end_date))
        .await?;

    Ok((StatusCode::OK, Json(breakdown)))
}

/// Printable invoice for a completed payment.
#[utoipa::path(
    get,
    path = "/api/payments/{id}/invoice",
    tag = PAYMENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Payment id")
    ),
    responses(
        (status = 200, description = "Invoice", body = InvoiceDto),
        (status = 404, description = "No completed payment with that id", body = ErrorDto)
    ),
)]
pub async fn get_payment_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let invoice = PaymentService::new(&state.db).invoice(id).await?;

    Ok((StatusCode::OK, Json(invoice)))
}

/// Get one payment with booking, guest and voucher details.
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Payment id")
    ),
    responses(
        (status = 200, description = "Payment detail", body = PaymentDetailDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let detail = PaymentService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Refund a completed payment (admin/staff).
///
/// Marks the payment refunded, cancels the booking and releases the room in
/// one transaction.
#[utoipa::path(
    post,
    path = "/api/payments/{id}/refund",
    tag = PAYMENT_TAG,
    params(
        ("id" = Uuid, Path, description = "Payment id")
    ),
    request_body = RefundRequestDto,
    responses(
        (status = 200, description = "Refund processed", body = RefundResponseDto),
        (status = 400, description = "Refund not allowed", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
)]
pub async fn refund_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(dto): Json<RefundRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let payment = PaymentService::new(&state.db)
        .refund(id, dto.refund_amount, dto.reason)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RefundResponseDto {
            message: "Refund processed successfully".to_string(),
            refund_amount: payment.refund_amount.unwrap_or_default(),
        }),
    ))
}
