use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct TotalRevenueDto {
    pub total_revenue: Decimal,
}

/// Revenue for one calendar month, keyed "YYYY-MM".
#[derive(Serialize, ToSchema)]
pub struct MonthlyRevenueDto {
    pub month: String,
    pub total_revenue: Decimal,
}

#[derive(Serialize, ToSchema)]
pub struct RevenueFilterDto {
    pub month: u32,
    pub year: i32,
    pub total_revenue: Decimal,
}

#[derive(Serialize, ToSchema)]
pub struct RoomTypeRevenueDto {
    pub room_type: String,
    pub total_revenue: Decimal,
    pub total_bookings: u64,
}
