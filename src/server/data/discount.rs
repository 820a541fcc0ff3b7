//! Discount voucher repository.

use chrono::{DateTime, Utc};
use entity::discount::DiscountStatus;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::discount::{CreateDiscountParams, UpdateDiscountParams};

pub struct DiscountRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all vouchers, newest first, optionally filtered by status.
    pub async fn get_all(
        &self,
        status: Option<DiscountStatus>,
    ) -> Result<Vec<entity::discount::Model>, DbErr> {
        let mut query = entity::prelude::Discount::find();

        if let Some(status) = status {
            query = query.filter(entity::discount::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::discount::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::discount::Model>, DbErr> {
        entity::prelude::Discount::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<entity::discount::Model>, DbErr> {
        entity::prelude::Discount::find()
            .filter(entity::discount::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Looks up a redeemable voucher: active and currently inside its
    /// validity window. Usage-limit exhaustion is checked by the caller so it
    /// can surface a distinct validation error.
    pub async fn find_valid_by_code(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::discount::Model>, DbErr> {
        entity::prelude::Discount::find()
            .filter(entity::discount::Column::Code.eq(code))
            .filter(entity::discount::Column::Status.eq(DiscountStatus::Active))
            .filter(entity::discount::Column::ValidFrom.lte(now))
            .filter(entity::discount::Column::ValidUntil.gte(now))
            .one(self.db)
            .await
    }

    /// Increments the redemption counter. Runs inside the payment
    /// transaction so the counter moves atomically with the payment insert.
    pub async fn increment_usage(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Discount::update_many()
            .filter(entity::discount::Column::Id.eq(id))
            .col_expr(
                entity::discount::Column::UsageUsed,
                Expr::col(entity::discount::Column::UsageUsed).add(1),
            )
            .col_expr(entity::discount::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn create(
        &self,
        params: CreateDiscountParams,
    ) -> Result<entity::discount::Model, DbErr> {
        let now = Utc::now();
        entity::discount::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            discount_type: ActiveValue::Set(params.discount_type),
            value: ActiveValue::Set(params.value),
            usage_limit: ActiveValue::Set(params.usage_limit),
            usage_used: ActiveValue::Set(0),
            valid_from: ActiveValue::Set(params.valid_from),
            valid_until: ActiveValue::Set(params.valid_until),
            status: ActiveValue::Set(DiscountStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update; None fields keep their current value.
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateDiscountParams,
    ) -> Result<Option<entity::discount::Model>, DbErr> {
        let Some(discount) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::discount::ActiveModel = discount.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(discount_type) = params.discount_type {
            active.discount_type = ActiveValue::Set(discount_type);
        }
        if let Some(value) = params.value {
            active.value = ActiveValue::Set(value);
        }
        if let Some(valid_from) = params.valid_from {
            active.valid_from = ActiveValue::Set(valid_from);
        }
        if let Some(valid_until) = params.valid_until {
            active.valid_until = ActiveValue::Set(valid_until);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(usage_limit) = params.usage_limit {
            active.usage_limit = ActiveValue::Set(Some(usage_limit));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a voucher, returning the deleted row.
    pub async fn delete(&self, id: Uuid) -> Result<Option<entity::discount::Model>, DbErr> {
        let Some(discount) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::Discount::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(discount))
    }
}
