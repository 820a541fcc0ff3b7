//! Booking factory for creating test booking entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test bookings with customizable fields.
///
/// Defaults to a two-night pending stay starting tomorrow at 100 per night.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
/// use entity::booking::BookingStatus;
///
/// let booking = BookingFactory::new(&db, user.id, room.id)
///     .status(BookingStatus::Confirmed)
///     .created_at(Utc::now() - Duration::hours(30))
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    room_id: Uuid,
    check_in: chrono::NaiveDate,
    check_out: chrono::NaiveDate,
    nightly_rate: Decimal,
    total_amount: Decimal,
    status: BookingStatus,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, room_id: Uuid) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            user_id,
            room_id,
            check_in: today + Duration::days(1),
            check_out: today + Duration::days(3),
            nightly_rate: Decimal::from(100),
            total_amount: Decimal::from(200),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Sets the check-in date.
    pub fn check_in(mut self, check_in: chrono::NaiveDate) -> Self {
        self.check_in = check_in;
        self
    }

    /// Sets the check-out date.
    pub fn check_out(mut self, check_out: chrono::NaiveDate) -> Self {
        self.check_out = check_out;
        self
    }

    /// Sets the nightly rate.
    pub fn nightly_rate(mut self, nightly_rate: Decimal) -> Self {
        self.nightly_rate = nightly_rate;
        self
    }

    /// Sets the total amount.
    pub fn total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = total_amount;
        self
    }

    /// Sets the booking status.
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp. Useful for cancellation-window tests.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            booking_code: ActiveValue::Set(format!("BK-TEST{:04}", next_id())),
            user_id: ActiveValue::Set(self.user_id),
            room_id: ActiveValue::Set(self.room_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            nightly_rate: ActiveValue::Set(self.nightly_rate),
            total_amount: ActiveValue::Set(self.total_amount),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: Uuid,
    room_id: Uuid,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, room_id).build().await
}
