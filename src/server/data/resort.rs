//! Resort repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ResortRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResortRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::resort::Model>, DbErr> {
        entity::prelude::Resort::find()
            .order_by_asc(entity::resort::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::resort::Model>, DbErr> {
        entity::prelude::Resort::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, name: String) -> Result<entity::resort::Model, DbErr> {
        let now = Utc::now();
        entity::resort::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::resort::Model>, DbErr> {
        let Some(resort) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::resort::ActiveModel = resort.into();
        active.name = ActiveValue::Set(name);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Resort::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Whether any room still references this resort. Deleting a resort is
    /// blocked while this holds.
    pub async fn has_rooms(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Room::find()
            .filter(entity::room::Column::ResortId.eq(id))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }
}
