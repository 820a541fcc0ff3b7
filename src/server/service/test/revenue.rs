use chrono::NaiveDate;
use entity::booking::BookingStatus;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::service::revenue::RevenueService;

/// Seeds one pending, one confirmed and one completed booking across two
/// different months.
async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let (user, _resort, _room_type, room) =
        factory::helpers::create_booking_dependencies(db).await?;

    factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in(NaiveDate::from_ymd_opt(2025, 10, 10).unwrap())
        .total_amount(Decimal::from(300))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in(NaiveDate::from_ymd_opt(2025, 11, 2).unwrap())
        .total_amount(Decimal::from(500))
        .status(BookingStatus::Completed)
        .build()
        .await?;
    // Pending bookings never count towards revenue.
    factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in(NaiveDate::from_ymd_opt(2025, 11, 5).unwrap())
        .total_amount(Decimal::from(999))
        .build()
        .await?;

    Ok(())
}

/// Tests the total over confirmed and completed bookings.
#[tokio::test]
async fn totals_confirmed_and_completed_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let total = RevenueService::new(db).total().await.unwrap();
    assert_eq!(total, Decimal::from(800));

    Ok(())
}

/// Tests the per-month grouping and the single-month filter.
#[tokio::test]
async fn groups_revenue_by_checkin_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let service = RevenueService::new(db);

    let months = service.monthly().await.unwrap();
    assert_eq!(months.len(), 2);
    assert_eq!(months[0].month, "2025-10");
    assert_eq!(months[0].total_revenue, Decimal::from(300));
    assert_eq!(months[1].month, "2025-11");
    assert_eq!(months[1].total_revenue, Decimal::from(500));

    let november = service.for_month(11, 2025).await.unwrap();
    assert_eq!(november, Decimal::from(500));

    Ok(())
}

/// Tests the per-room-type breakdown, including a type with no bookings.
#[tokio::test]
async fn breaks_revenue_down_by_room_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    // A second room type nobody has booked.
    factory::room_type::create_room_type(db).await?;

    let breakdown = RevenueService::new(db).by_room_type().await.unwrap();

    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].total_revenue, Decimal::from(800));
    assert_eq!(breakdown[0].total_bookings, 2);
    assert_eq!(breakdown[1].total_revenue, Decimal::ZERO);
    assert_eq!(breakdown[1].total_bookings, 0);

    Ok(())
}
