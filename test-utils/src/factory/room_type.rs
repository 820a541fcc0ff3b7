//! Room type factory for creating test room type entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a room type with a generated name and a default price of 100 per night.
pub async fn create_room_type(db: &DatabaseConnection) -> Result<entity::room_type::Model, DbErr> {
    create_room_type_with_price(db, Decimal::from(100)).await
}

/// Creates a room type with a specific default nightly price.
pub async fn create_room_type_with_price(
    db: &DatabaseConnection,
    price_per_night: Decimal,
) -> Result<entity::room_type::Model, DbErr> {
    entity::room_type::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(format!("Room Type {}", next_id())),
        price_per_night: ActiveValue::Set(price_per_night),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
