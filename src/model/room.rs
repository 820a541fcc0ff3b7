use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A room joined with its resort, type and detail row. `actual_price` is the
/// per-room override when one exists, otherwise the type's default price.
#[derive(Serialize, ToSchema)]
pub struct RoomDto {
    pub id: Uuid,
    pub resort_id: i32,
    pub resort_name: String,
    pub room_type_id: Uuid,
    pub room_type: String,
    pub default_price: Decimal,
    pub actual_price: Decimal,
    pub description: Option<String>,
    pub features: Option<serde_json::Value>,
    pub images_url: Option<serde_json::Value>,
    #[schema(value_type = String)]
    pub status: entity::room::RoomStatus,
    pub category: String,
    pub location: String,
    pub address: String,
    pub num_bed: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateRoomDto {
    pub resort_id: i32,
    pub room_type_id: Uuid,
    pub location: String,
    pub address: Option<String>,
    /// Defaults to available.
    pub status: Option<String>,
    pub description: Option<String>,
    pub num_bed: Option<String>,
    pub price_per_night: Option<Decimal>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateRoomDto {
    pub resort_id: i32,
    pub room_type_id: Uuid,
    pub location: String,
    pub address: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub num_bed: Option<String>,
    pub price_per_night: Option<Decimal>,
}

#[derive(Serialize, ToSchema)]
pub struct RoomCreatedDto {
    pub message: String,
    pub room_id: Uuid,
}

/// One row of the most-booked-rooms ranking.
#[derive(Serialize, ToSchema)]
pub struct TopBookedRoomDto {
    pub id: Uuid,
    pub category: String,
    pub location: String,
    pub booking_count: u64,
    pub total_revenue: Decimal,
}

#[derive(Serialize, ToSchema)]
pub struct RoomTypeDto {
    pub id: Uuid,
    pub name: String,
    pub price_per_night: Decimal,
}

impl RoomTypeDto {
    pub fn from_entity(entity: entity::room_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price_per_night: entity.price_per_night,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateRoomTypeDto {
    pub name: String,
    pub price_per_night: Decimal,
}
