//! Booking lifecycle: creation, cancellation, and the admin status updates
//! that keep room availability in sync.

use chrono::{Duration, NaiveDate, Utc};
use entity::booking::BookingStatus;
use entity::room::RoomStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::booking::{AdminBookingDto, BookingDetailDto, MyBookingDto},
    model::room::TopBookedRoomDto,
    server::{
        data::{
            booking::BookingRepository, resort::ResortRepository, room::RoomRepository,
            user::UserRepository,
        },
        error::AppError,
        model::booking::{BookingListFilter, CreateBookingParams},
        util::{code, parse},
    },
};

/// Guests may cancel a booking this long after creating it.
const CANCEL_WINDOW_HOURS: i64 = 24;

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking with status pending.
    ///
    /// Dates arrive as DD/MM/YYYY strings. The total is
    /// `nights x nightly rate` where nights is the calendar-day difference
    /// floored at one, so a same-day or inverted range still charges one
    /// night. No availability check happens here; the room is only held once
    /// the booking is paid and confirmed.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated owner of the booking
    /// - `room_id` - Room being booked
    /// - `check_in` / `check_out` - Stay dates, "DD/MM/YYYY"
    /// - `nightly_rate` - Price per night agreed at booking time
    ///
    /// # Returns
    /// - `Ok(Model)` - The created booking with its generated code
    /// - `Err(AppError::BadRequest)` - Unparseable dates or non-positive rate
    pub async fn create(
        &self,
        user_id: Uuid,
        room_id: Uuid,
        check_in: &str,
        check_out: &str,
        nightly_rate: Decimal,
    ) -> Result<entity::booking::Model, AppError> {
        if nightly_rate <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Missing or invalid booking information".to_string(),
            ));
        }

        let check_in = parse::parse_date_dmy(check_in)?;
        let check_out = parse::parse_date_dmy(check_out)?;

        let nights = Self::nights_between(check_in, check_out);
        let total_amount = Decimal::from(nights) * nightly_rate;

        let repo = BookingRepository::new(self.db);
        let booking = repo
            .create(CreateBookingParams {
                booking_code: code::booking_code(),
                user_id,
                room_id,
                check_in,
                check_out,
                nightly_rate,
                total_amount,
            })
            .await?;

        Ok(booking)
    }

    /// Number of nights charged for a stay: the calendar-day difference,
    /// floored at one.
    pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
        (check_out - check_in).num_days().max(1)
    }

    /// Cancels a booking on behalf of its owner and releases the room.
    ///
    /// Preconditions, checked inside one transaction: the booking exists
    /// (404), belongs to the caller (403), is still pending or confirmed
    /// (400), and was created less than 24 hours ago (400). On success the
    /// booking moves to cancelled and the room back to available atomically.
    pub async fn cancel(
        &self,
        user_id: Uuid,
        booking_id: Uuid,
    ) -> Result<entity::booking::Model, AppError> {
        let txn = self.db.begin().await?;

        let booking_repo = BookingRepository::new(&txn);

        let Some(booking) = booking_repo.find_by_id(booking_id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        if booking.user_id != user_id {
            return Err(AppError::Forbidden(
                "You can only cancel your own bookings".to_string(),
            ));
        }

        if !matches!(
            booking.status,
            BookingStatus::Pending | BookingStatus::Confirmed
        ) {
            return Err(AppError::BadRequest(
                "Only pending or confirmed bookings can be cancelled".to_string(),
            ));
        }

        if Utc::now() - booking.created_at > Duration::hours(CANCEL_WINDOW_HOURS) {
            return Err(AppError::BadRequest(format!(
                "Bookings can only be cancelled within {} hours of creation",
                CANCEL_WINDOW_HOURS
            )));
        }

        let room_id = booking.room_id;
        let updated = booking_repo
            .set_status(booking_id, BookingStatus::Cancelled)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        RoomRepository::new(&txn)
            .set_status(room_id, RoomStatus::Available)
            .await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Admin status update with the booking-to-room synchronization map.
    ///
    /// Accepted target statuses and their room side effects:
    ///
    /// | Booking status | Room status |
    /// |---|---|
    /// | confirmed  | reserved  |
    /// | cancelled  | available |
    /// | checked_in | occupied  |
    /// | checked_out| available |
    ///
    /// Both updates run in one transaction; a booking updated without its
    /// room would corrupt the inventory view.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated booking
    /// - `Err(AppError::BadRequest)` - Status outside the accepted set
    /// - `Err(AppError::NotFound)` - No booking with that id
    pub async fn update_status(
        &self,
        booking_id: Uuid,
        status: &str,
    ) -> Result<entity::booking::Model, AppError> {
        let status = BookingStatus::try_from_value(&status.to_string())
            .map_err(|_| AppError::BadRequest("Invalid status".to_string()))?;

        let Some(room_status) = Self::room_status_for(status) else {
            return Err(AppError::BadRequest("Invalid status".to_string()));
        };

        let txn = self.db.begin().await?;

        let updated = BookingRepository::new(&txn)
            .set_status(booking_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        RoomRepository::new(&txn)
            .set_status(updated.room_id, room_status)
            .await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Room status implied by an admin booking transition. `None` means the
    /// transition is not allowed through the admin endpoint.
    pub fn room_status_for(status: BookingStatus) -> Option<RoomStatus> {
        match status {
            BookingStatus::Confirmed => Some(RoomStatus::Reserved),
            BookingStatus::Cancelled => Some(RoomStatus::Available),
            BookingStatus::CheckedIn => Some(RoomStatus::Occupied),
            BookingStatus::CheckedOut => Some(RoomStatus::Available),
            BookingStatus::Pending | BookingStatus::Completed => None,
        }
    }

    /// The caller's booking history, enriched with resort names and images.
    pub async fn my_bookings(&self, user_id: Uuid) -> Result<Vec<MyBookingDto>, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);
        let resort_repo = ResortRepository::new(self.db);

        let bookings = booking_repo.find_by_user(user_id).await?;

        let mut result = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let room = room_repo.find_by_id(booking.room_id).await?;
            let resort_name = match &room {
                Some(room) => resort_repo
                    .find_by_id(room.resort_id)
                    .await?
                    .map(|r| r.name)
                    .unwrap_or_default(),
                None => String::new(),
            };
            let images_url = room_repo
                .find_detail(booking.room_id)
                .await?
                .map(|d| d.images_url);

            result.push(MyBookingDto {
                id: booking.id,
                booking_code: booking.booking_code,
                check_in: booking.check_in,
                check_out: booking.check_out,
                total_amount: booking.total_amount,
                status: booking.status,
                resort_name,
                images_url,
            });
        }

        Ok(result)
    }

    /// Full booking detail joined with guest, room, resort and room detail.
    pub async fn get_detail(&self, booking_id: Uuid) -> Result<BookingDetailDto, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);
        let resort_repo = ResortRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let booking = booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let user = user_repo
            .find_by_id(booking.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking owner not found".to_string()))?;

        let room = room_repo
            .find_by_id(booking.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let resort_name = resort_repo
            .find_by_id(room.resort_id)
            .await?
            .map(|r| r.name)
            .unwrap_or_default();

        let detail = room_repo.find_detail(booking.room_id).await?;

        Ok(BookingDetailDto {
            id: booking.id,
            booking_code: booking.booking_code,
            check_in: booking.check_in,
            check_out: booking.check_out,
            nightly_rate: booking.nightly_rate,
            total_amount: booking.total_amount,
            status: booking.status,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            resort_name,
            location: room.location,
            description: detail.as_ref().map(|d| d.description.clone()),
            images_url: detail.map(|d| d.images_url),
        })
    }

    /// The admin booking list, enriched with guest and resort info.
    pub async fn list_all(&self, filter: BookingListFilter) -> Result<Vec<AdminBookingDto>, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);
        let resort_repo = ResortRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let bookings = booking_repo.get_all(&filter).await?;

        let mut result = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let user = user_repo.find_by_id(booking.user_id).await?;
            let room = room_repo.find_by_id(booking.room_id).await?;
            let resort_name = match &room {
                Some(room) => resort_repo
                    .find_by_id(room.resort_id)
                    .await?
                    .map(|r| r.name)
                    .unwrap_or_default(),
                None => String::new(),
            };

            result.push(AdminBookingDto {
                id: booking.id,
                booking_code: booking.booking_code,
                check_in: booking.check_in,
                check_out: booking.check_out,
                total_amount: booking.total_amount,
                status: booking.status,
                created_at: booking.created_at,
                full_name: user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default(),
                email: user.map(|u| u.email).unwrap_or_default(),
                resort_name,
                location: room.map(|r| r.location).unwrap_or_default(),
            });
        }

        Ok(result)
    }

    pub async fn count_total(&self) -> Result<u64, AppError> {
        Ok(BookingRepository::new(self.db).count_all().await?)
    }

    /// Counts bookings whose check-in falls in the given month.
    pub async fn count_by_month(&self, month: u32, year: i32) -> Result<u64, AppError> {
        let (start, end) = parse::month_bounds(month, year)?;
        Ok(BookingRepository::new(self.db)
            .count_checkin_between(start, end)
            .await?)
    }

    /// Ranks rooms by number of confirmed bookings, revenue as tiebreak data.
    /// Rooms without bookings still appear with zero counts.
    pub async fn top_booked_rooms(&self, limit: usize) -> Result<Vec<TopBookedRoomDto>, AppError> {
        use std::collections::HashMap;

        let rooms = RoomRepository::new(self.db)
            .get_filtered(&Default::default())
            .await?;
        let confirmed = BookingRepository::new(self.db)
            .find_by_statuses(&[BookingStatus::Confirmed])
            .await?;

        let mut by_room: HashMap<Uuid, (u64, Decimal)> = HashMap::new();
        for booking in confirmed {
            let entry = by_room.entry(booking.room_id).or_default();
            entry.0 += 1;
            entry.1 += booking.total_amount;
        }

        let mut result: Vec<TopBookedRoomDto> = rooms
            .into_iter()
            .map(|room| {
                let (booking_count, total_revenue) =
                    by_room.get(&room.id).copied().unwrap_or_default();
                TopBookedRoomDto {
                    id: room.id,
                    category: room.category,
                    location: room.location,
                    booking_count,
                    total_revenue,
                }
            })
            .collect();

        result.sort_by(|a, b| b.booking_count.cmp(&a.booking_count));
        result.truncate(limit);

        Ok(result)
    }
}
