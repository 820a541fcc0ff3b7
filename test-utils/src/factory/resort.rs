//! Resort factory for creating test resort entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a resort with a generated unique name.
pub async fn create_resort(db: &DatabaseConnection) -> Result<entity::resort::Model, DbErr> {
    create_resort_with_name(db, format!("Resort {}", next_id())).await
}

/// Creates a resort with a specific name.
pub async fn create_resort_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::resort::Model, DbErr> {
    let now = Utc::now();
    entity::resort::ActiveModel {
        name: ActiveValue::Set(name.into()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
