use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct DiscountDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub discount_type: entity::discount::DiscountType,
    pub value: Decimal,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    #[schema(value_type = String)]
    pub status: entity::discount::DiscountStatus,
    pub usage_limit: Option<i32>,
    pub usage_used: i32,
}

impl DiscountDto {
    pub fn from_entity(entity: entity::discount::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            description: entity.description,
            discount_type: entity.discount_type,
            value: entity.value,
            valid_from: entity.valid_from,
            valid_until: entity.valid_until,
            status: entity.status,
            usage_limit: entity.usage_limit,
            usage_used: entity.usage_used,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateDiscountDto {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// One of percent, fixed.
    pub discount_type: String,
    pub value: Decimal,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub usage_limit: Option<i32>,
}

/// Partial update; absent fields keep their current value.
#[derive(Deserialize, ToSchema)]
pub struct UpdateDiscountDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<String>,
    pub value: Option<Decimal>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub usage_limit: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct DiscountDeletedDto {
    pub message: String,
    pub deleted: DiscountDto,
}
