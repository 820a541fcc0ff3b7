use chrono::{DateTime, Utc};
use entity::discount::{DiscountStatus, DiscountType};
use rust_decimal::Decimal;

/// Parameters for inserting a new voucher. New vouchers are always active.
#[derive(Debug, Clone)]
pub struct CreateDiscountParams {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub value: Decimal,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub usage_limit: Option<i32>,
}

/// Partial voucher update; None fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateDiscountParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub value: Option<Decimal>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub status: Option<DiscountStatus>,
    pub usage_limit: Option<i32>,
}
