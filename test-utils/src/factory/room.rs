//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::room::RoomStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
/// use entity::room::RoomStatus;
///
/// let room = RoomFactory::new(&db, resort.id, room_type.id)
///     .status(RoomStatus::Reserved)
///     .location("Beachfront")
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    resort_id: i32,
    room_type_id: Uuid,
    location: String,
    address: String,
    status: RoomStatus,
    category: String,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - location: `"Building {id}"` where id is auto-incremented
    /// - status: `RoomStatus::Available`
    /// - category: `"standard"`
    pub fn new(db: &'a DatabaseConnection, resort_id: i32, room_type_id: Uuid) -> Self {
        Self {
            db,
            resort_id,
            room_type_id,
            location: format!("Building {}", next_id()),
            address: String::new(),
            status: RoomStatus::Available,
            category: "standard".to_string(),
        }
    }

    /// Sets the location for the room.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the status for the room.
    pub fn status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the category for the room.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        entity::room::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            resort_id: ActiveValue::Set(self.resort_id),
            room_type_id: ActiveValue::Set(self.room_type_id),
            location: ActiveValue::Set(self.location),
            address: ActiveValue::Set(self.address),
            status: ActiveValue::Set(self.status),
            category: ActiveValue::Set(self.category),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available room with default values.
pub async fn create_room(
    db: &DatabaseConnection,
    resort_id: i32,
    room_type_id: Uuid,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, resort_id, room_type_id).build().await
}
