//! Payment repository.

use chrono::{DateTime, Utc};
use entity::payment::PaymentStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::payment::{CreatePaymentParams, DateRange, PaymentListFilter};

pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new payment with status pending.
    pub async fn create(
        &self,
        params: CreatePaymentParams,
    ) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            transaction_code: ActiveValue::Set(params.transaction_code),
            booking_id: ActiveValue::Set(params.booking_id),
            user_id: ActiveValue::Set(params.user_id),
            payment_method: ActiveValue::Set(params.payment_method),
            amount: ActiveValue::Set(params.amount),
            discount_id: ActiveValue::Set(params.discount_id),
            status: ActiveValue::Set(PaymentStatus::Pending),
            transaction_date: ActiveValue::Set(Utc::now()),
            paid_at: ActiveValue::Set(None),
            refund_amount: ActiveValue::Set(None),
            refunded_at: ActiveValue::Set(None),
            refund_reason: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }

    /// Whether the booking already has a completed payment. The caller must
    /// hold the booking row lock for this check to be race-free.
    pub async fn completed_exists_for_booking(&self, booking_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .filter(entity::payment::Column::Status.eq(PaymentStatus::Completed))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Marks a pending payment as completed with a paid timestamp.
    pub async fn mark_completed(
        &self,
        payment: entity::payment::Model,
        paid_at: DateTime<Utc>,
    ) -> Result<entity::payment::Model, DbErr> {
        let mut active: entity::payment::ActiveModel = payment.into();
        active.status = ActiveValue::Set(PaymentStatus::Completed);
        active.paid_at = ActiveValue::Set(Some(paid_at));
        active.update(self.db).await
    }

    /// Marks a completed payment as refunded.
    pub async fn mark_refunded(
        &self,
        payment: entity::payment::Model,
        refund_amount: Decimal,
        reason: Option<String>,
        refunded_at: DateTime<Utc>,
    ) -> Result<entity::payment::Model, DbErr> {
        let mut active: entity::payment::ActiveModel = payment.into();
        active.status = ActiveValue::Set(PaymentStatus::Refunded);
        active.refund_amount = ActiveValue::Set(Some(refund_amount));
        active.refund_reason = ActiveValue::Set(reason);
        active.refunded_at = ActiveValue::Set(Some(refunded_at));
        active.update(self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find_by_id(id).one(self.db).await
    }

    /// Gets a user's payments, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::UserId.eq(user_id))
            .order_by_desc(entity::payment::Column::TransactionDate)
            .all(self.db)
            .await
    }

    /// Gets payments for the admin list, newest first, with optional status,
    /// method and date-range filters and limit/offset pagination.
    pub async fn get_all(
        &self,
        filter: &PaymentListFilter,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        let mut query = entity::prelude::Payment::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::payment::Column::Status.eq(status));
        }
        if let Some(method) = filter.payment_method {
            query = query.filter(entity::payment::Column::PaymentMethod.eq(method));
        }
        if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            query = query
                .filter(entity::payment::Column::TransactionDate.gte(start))
                .filter(entity::payment::Column::TransactionDate.lte(end));
        }

        query
            .order_by_desc(entity::payment::Column::TransactionDate)
            .limit(filter.limit)
            .offset(filter.offset)
            .all(self.db)
            .await
    }

    /// Gets all payments inside the optional date range, for the aggregate
    /// stats endpoints.
    pub async fn find_in_range(
        &self,
        range: DateRange,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        let mut query = entity::prelude::Payment::find();

        if let (Some(start), Some(end)) = (range.start, range.end) {
            query = query
                .filter(entity::payment::Column::TransactionDate.gte(start))
                .filter(entity::payment::Column::TransactionDate.lte(end));
        }

        query.all(self.db).await
    }
}
