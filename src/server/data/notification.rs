//! Notification repository.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct NotificationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets notifications, newest first. When `user_id` is given only that
    /// user's notifications are returned.
    pub async fn get_all(
        &self,
        user_id: Option<Uuid>,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        let mut query = entity::prelude::Notification::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::notification::Column::UserId.eq(user_id));
        }

        query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        title: String,
        content: String,
        user_id: Option<Uuid>,
        kind: Option<String>,
    ) -> Result<entity::notification::Model, DbErr> {
        let now = Utc::now();
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title),
            content: ActiveValue::Set(content),
            kind: ActiveValue::Set(kind),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Flips the read flag on one notification.
    pub async fn set_read(
        &self,
        id: i32,
        is_read: bool,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        let Some(notification) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::notification::ActiveModel = notification.into();
        active.is_read = ActiveValue::Set(is_read);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Marks all of a user's unread notifications as read, returning the
    /// number of rows touched.
    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .col_expr(
                entity::notification::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_unread(&self, user_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }
}
