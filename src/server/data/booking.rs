//! Booking repository.

use chrono::{NaiveDate, Utc};
use entity::booking::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::booking::{BookingListFilter, CreateBookingParams};

pub struct BookingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new booking with status pending.
    pub async fn create(
        &self,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            booking_code: ActiveValue::Set(params.booking_code),
            user_id: ActiveValue::Set(params.user_id),
            room_id: ActiveValue::Set(params.room_id),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            nightly_rate: ActiveValue::Set(params.nightly_rate),
            total_amount: ActiveValue::Set(params.total_amount),
            status: ActiveValue::Set(BookingStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Loads a booking with an exclusive row lock.
    ///
    /// Used by the payment path so two concurrent payment attempts for the
    /// same booking serialize on the row before the double-payment check.
    /// SQLite ignores the locking clause; its single-writer model provides
    /// the same guarantee there.
    pub async fn find_by_id_locked(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Gets a user's bookings, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets bookings for the admin list, newest first, with an optional
    /// status filter and limit/offset pagination.
    pub async fn get_all(
        &self,
        filter: &BookingListFilter,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::booking::Column::CreatedAt)
            .limit(filter.limit)
            .offset(filter.offset)
            .all(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Booking::find().count(self.db).await
    }

    /// Counts bookings whose check-in falls within `[start, end)`.
    pub async fn count_checkin_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CheckIn.gte(start))
            .filter(entity::booking::Column::CheckIn.lt(end))
            .count(self.db)
            .await
    }

    /// Gets all bookings in any of the given statuses. Used by the revenue
    /// and top-rooms aggregations.
    pub async fn find_by_statuses(
        &self,
        statuses: &[BookingStatus],
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.is_in(statuses.iter().copied()))
            .all(self.db)
            .await
    }

    /// Sets the booking status and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated booking
    /// - `Ok(None)` - No booking with that id
    pub async fn set_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        let Some(booking) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::booking::ActiveModel = booking.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }
}
