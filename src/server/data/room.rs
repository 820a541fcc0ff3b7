//! Room and room-detail repository.
//!
//! The rooms row and its 1:1 room_details row are managed together: creation
//! and updates touch both tables and are expected to run inside a transaction
//! owned by the caller.

use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::server::model::room::{RoomDetailParams, RoomFilter, RoomParams};

pub struct RoomRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets rooms matching the optional filters, newest first.
    ///
    /// # Arguments
    /// - `filter` - resort id, case-insensitive location substring, and exact
    ///   room type name; all optional
    pub async fn get_filtered(&self, filter: &RoomFilter) -> Result<Vec<entity::room::Model>, DbErr> {
        let mut query = entity::prelude::Room::find();

        if let Some(resort_id) = filter.resort_id {
            query = query.filter(entity::room::Column::ResortId.eq(resort_id));
        }
        if let Some(ref location) = filter.location {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::room::Column::Location)))
                    .like(format!("%{}%", location.to_lowercase())),
            );
        }
        if let Some(ref room_type) = filter.room_type {
            query = query
                .join(JoinType::InnerJoin, entity::room::Relation::RoomType.def())
                .filter(entity::room_type::Column::Name.eq(room_type.as_str()));
        }

        query
            .order_by_desc(entity::room::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, params: RoomParams) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        entity::room::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            resort_id: ActiveValue::Set(params.resort_id),
            room_type_id: ActiveValue::Set(params.room_type_id),
            location: ActiveValue::Set(params.location),
            address: ActiveValue::Set(params.address),
            status: ActiveValue::Set(params.status),
            category: ActiveValue::Set(params.category),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: RoomParams,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let Some(room) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = room.into();
        active.resort_id = ActiveValue::Set(params.resort_id);
        active.room_type_id = ActiveValue::Set(params.room_type_id);
        active.location = ActiveValue::Set(params.location);
        active.address = ActiveValue::Set(params.address);
        active.status = ActiveValue::Set(params.status);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Sets the room's availability status, as driven by booking transitions.
    pub async fn set_status(&self, id: Uuid, status: entity::room::RoomStatus) -> Result<(), DbErr> {
        entity::prelude::Room::update_many()
            .filter(entity::room::Column::Id.eq(id))
            .col_expr(entity::room::Column::Status, Expr::value(status))
            .col_expr(entity::room::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Whether any booking references this room. Deleting a room is blocked
    /// while this holds; the admin is expected to move it to maintenance
    /// instead.
    pub async fn has_bookings(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(id))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    // Room detail operations. The detail row carries the descriptive content
    // and the optional per-room price override.

    pub async fn find_detail(
        &self,
        room_id: Uuid,
    ) -> Result<Option<entity::room_detail::Model>, DbErr> {
        entity::prelude::RoomDetail::find()
            .filter(entity::room_detail::Column::RoomId.eq(room_id))
            .one(self.db)
            .await
    }

    /// Gets the detail rows for a set of rooms in one query.
    pub async fn find_details_for_rooms(
        &self,
        room_ids: Vec<Uuid>,
    ) -> Result<Vec<entity::room_detail::Model>, DbErr> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RoomDetail::find()
            .filter(entity::room_detail::Column::RoomId.is_in(room_ids))
            .all(self.db)
            .await
    }

    pub async fn insert_detail(
        &self,
        room_id: Uuid,
        params: RoomDetailParams,
    ) -> Result<entity::room_detail::Model, DbErr> {
        let now = Utc::now();
        entity::room_detail::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            description: ActiveValue::Set(params.description),
            features: ActiveValue::Set(serde_json::Value::Array(Vec::new())),
            images_url: ActiveValue::Set(serde_json::Value::Array(Vec::new())),
            num_bed: ActiveValue::Set(params.num_bed),
            price_per_night: ActiveValue::Set(params.price_per_night),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates the detail row for a room, inserting it if missing.
    pub async fn upsert_detail(
        &self,
        room_id: Uuid,
        params: RoomDetailParams,
    ) -> Result<entity::room_detail::Model, DbErr> {
        match self.find_detail(room_id).await? {
            Some(detail) => {
                let mut active: entity::room_detail::ActiveModel = detail.into();
                active.description = ActiveValue::Set(params.description);
                active.num_bed = ActiveValue::Set(params.num_bed);
                active.price_per_night = ActiveValue::Set(params.price_per_night);
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.db).await
            }
            None => self.insert_detail(room_id, params).await,
        }
    }

    pub async fn delete_detail(&self, room_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::RoomDetail::delete_many()
            .filter(entity::room_detail::Column::RoomId.eq(room_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
