//! Revenue aggregations over confirmed and completed bookings.

use entity::booking::BookingStatus;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::{
    model::revenue::{MonthlyRevenueDto, RoomTypeRevenueDto},
    server::{
        data::{booking::BookingRepository, room::RoomRepository, room_type::RoomTypeRepository},
        error::AppError,
        util::parse,
    },
};

/// Booking statuses that count towards revenue.
const REVENUE_STATUSES: &[BookingStatus] = &[BookingStatus::Confirmed, BookingStatus::Completed];

pub struct RevenueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RevenueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Total revenue across the whole system.
    pub async fn total(&self) -> Result<Decimal, AppError> {
        let bookings = BookingRepository::new(self.db)
            .find_by_statuses(REVENUE_STATUSES)
            .await?;

        Ok(bookings.iter().map(|b| b.total_amount).sum())
    }

    /// Revenue grouped by check-in month, oldest month first.
    pub async fn monthly(&self) -> Result<Vec<MonthlyRevenueDto>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .find_by_statuses(REVENUE_STATUSES)
            .await?;

        let mut by_month: BTreeMap<String, Decimal> = BTreeMap::new();
        for booking in bookings {
            let month = booking.check_in.format("%Y-%m").to_string();
            *by_month.entry(month).or_default() += booking.total_amount;
        }

        Ok(by_month
            .into_iter()
            .map(|(month, total_revenue)| MonthlyRevenueDto {
                month,
                total_revenue,
            })
            .collect())
    }

    /// Revenue for one specific month.
    pub async fn for_month(&self, month: u32, year: i32) -> Result<Decimal, AppError> {
        let (start, end) = parse::month_bounds(month, year)?;

        let bookings = BookingRepository::new(self.db)
            .find_by_statuses(REVENUE_STATUSES)
            .await?;

        Ok(bookings
            .iter()
            .filter(|b| b.check_in >= start && b.check_in < end)
            .map(|b| b.total_amount)
            .sum())
    }

    /// Revenue and booking counts per room type, largest turnover first.
    /// Room types without revenue still appear with zeros.
    pub async fn by_room_type(&self) -> Result<Vec<RoomTypeRevenueDto>, AppError> {
        let room_types = RoomTypeRepository::new(self.db).get_all().await?;
        let rooms = RoomRepository::new(self.db)
            .get_filtered(&Default::default())
            .await?;
        let bookings = BookingRepository::new(self.db)
            .find_by_statuses(REVENUE_STATUSES)
            .await?;

        let room_to_type: HashMap<Uuid, Uuid> =
            rooms.iter().map(|r| (r.id, r.room_type_id)).collect();

        // type id -> (revenue, booking count)
        let mut by_type: HashMap<Uuid, (Decimal, u64)> = HashMap::new();
        for booking in bookings {
            if let Some(type_id) = room_to_type.get(&booking.room_id) {
                let entry = by_type.entry(*type_id).or_default();
                entry.0 += booking.total_amount;
                entry.1 += 1;
            }
        }

        let mut result: Vec<RoomTypeRevenueDto> = room_types
            .into_iter()
            .map(|room_type| {
                let (total_revenue, total_bookings) =
                    by_type.get(&room_type.id).copied().unwrap_or_default();
                RoomTypeRevenueDto {
                    room_type: room_type.name,
                    total_revenue,
                    total_bookings,
                }
            })
            .collect();

        result.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));

        Ok(result)
    }
}
