//! Review and review-reply repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct ReviewRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all reviews for a room, newest first.
    pub async fn find_by_room(&self, room_id: Uuid) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::RoomId.eq(room_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find_by_id(id).count(self.db).await?;
        Ok(count > 0)
    }

    pub async fn create(
        &self,
        room_id: Uuid,
        username: String,
        rating: i32,
        comment: String,
    ) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            username: ActiveValue::Set(username),
            rating: ActiveValue::Set(rating),
            comment: ActiveValue::Set(comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes a review, returning the deleted row.
    pub async fn delete(&self, id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        let Some(review) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(review))
    }

    /// Gets the replies to a review, oldest first.
    pub async fn find_replies(
        &self,
        review_id: i32,
    ) -> Result<Vec<entity::review_reply::Model>, DbErr> {
        entity::prelude::ReviewReply::find()
            .filter(entity::review_reply::Column::ReviewId.eq(review_id))
            .order_by_asc(entity::review_reply::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn create_reply(
        &self,
        review_id: i32,
        username: String,
        reply_content: String,
    ) -> Result<entity::review_reply::Model, DbErr> {
        entity::review_reply::ActiveModel {
            review_id: ActiveValue::Set(review_id),
            username: ActiveValue::Set(username),
            reply_content: ActiveValue::Set(reply_content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes a reply, returning the deleted row.
    pub async fn delete_reply(
        &self,
        id: i32,
    ) -> Result<Option<entity::review_reply::Model>, DbErr> {
        let Some(reply) = entity::prelude::ReviewReply::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::ReviewReply::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(reply))
    }
}
