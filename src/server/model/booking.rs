use chrono::NaiveDate;
use entity::booking::BookingStatus;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Parameters for inserting a new booking row.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub booking_code: String,
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nightly_rate: Decimal,
    pub total_amount: Decimal,
}

/// Filter for the admin booking list.
#[derive(Debug, Clone, Default)]
pub struct BookingListFilter {
    pub status: Option<BookingStatus>,
    pub limit: u64,
    pub offset: u64,
}
