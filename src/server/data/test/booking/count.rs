use super::*;

/// Tests total and per-month booking counts.
#[tokio::test]
async fn counts_bookings_by_checkin_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;

    factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in(NaiveDate::from_ymd_opt(2025, 10, 5).unwrap())
        .check_out(NaiveDate::from_ymd_opt(2025, 10, 7).unwrap())
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, user.id, room.id)
        .check_in(NaiveDate::from_ymd_opt(2025, 11, 5).unwrap())
        .check_out(NaiveDate::from_ymd_opt(2025, 11, 7).unwrap())
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.count_all().await?, 2);

    let october = repo
        .count_checkin_between(
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        )
        .await?;
    assert_eq!(october, 1);

    Ok(())
}

/// Tests the status-set query that feeds the revenue aggregations.
#[tokio::test]
async fn finds_bookings_by_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;

    factory::booking::create_booking(db, user.id, room.id).await?;
    factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Completed)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let revenue_rows = repo
        .find_by_statuses(&[BookingStatus::Confirmed, BookingStatus::Completed])
        .await?;

    assert_eq!(revenue_rows.len(), 2);
    assert!(revenue_rows
        .iter()
        .all(|b| b.status != BookingStatus::Pending));

    Ok(())
}
