use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for creating a booking. Dates use the DD/MM/YYYY format the
/// booking flow has always sent.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub room_id: Uuid,
    /// Check-in date, "DD/MM/YYYY".
    pub check_in: String,
    /// Check-out date, "DD/MM/YYYY".
    pub check_out: String,
    pub price_per_night: Decimal,
}

/// Subset of a booking returned right after creation.
#[derive(Serialize, ToSchema)]
pub struct BookingSummaryDto {
    pub id: Uuid,
    pub booking_code: String,
    pub total_amount: Decimal,
}

#[derive(Serialize, ToSchema)]
pub struct BookingCreatedDto {
    pub message: String,
    pub booking: BookingSummaryDto,
}

/// One row of the caller's booking history.
#[derive(Serialize, ToSchema)]
pub struct MyBookingDto {
    pub id: Uuid,
    pub booking_code: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_amount: Decimal,
    #[schema(value_type = String)]
    pub status: entity::booking::BookingStatus,
    pub resort_name: String,
    pub images_url: Option<serde_json::Value>,
}

/// Full booking detail joined with the guest, the room and its resort.
#[derive(Serialize, ToSchema)]
pub struct BookingDetailDto {
    pub id: Uuid,
    pub booking_code: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nightly_rate: Decimal,
    pub total_amount: Decimal,
    #[schema(value_type = String)]
    pub status: entity::booking::BookingStatus,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resort_name: String,
    pub location: String,
    pub description: Option<String>,
    pub images_url: Option<serde_json::Value>,
}

/// One row of the admin booking list.
#[derive(Serialize, ToSchema)]
pub struct AdminBookingDto {
    pub id: Uuid,
    pub booking_code: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_amount: Decimal,
    #[schema(value_type = String)]
    pub status: entity::booking::BookingStatus,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub email: String,
    pub resort_name: String,
    pub location: String,
}

/// Request body for the admin status update.
#[derive(Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    /// One of confirmed, cancelled, checked_in, checked_out.
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct BookingStatusSummaryDto {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub status: entity::booking::BookingStatus,
}

#[derive(Serialize, ToSchema)]
pub struct BookingStatusChangedDto {
    pub message: String,
    pub booking: BookingStatusSummaryDto,
}

#[derive(Serialize, ToSchema)]
pub struct TotalDto {
    pub total: u64,
}
