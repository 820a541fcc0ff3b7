//! Room type repository.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

pub struct RoomTypeRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::room_type::Model>, DbErr> {
        entity::prelude::RoomType::find()
            .order_by_asc(entity::room_type::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::room_type::Model>, DbErr> {
        entity::prelude::RoomType::find_by_id(id).one(self.db).await
    }

    pub async fn create(
        &self,
        name: String,
        price_per_night: Decimal,
    ) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name),
            price_per_night: ActiveValue::Set(price_per_night),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
