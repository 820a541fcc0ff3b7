use super::*;

/// Tests the stay-total computation.
///
/// A 01/12 to 03/12 stay at 100 per night spans two nights, so the stored
/// total must be 200 and the booking starts out pending.
#[tokio::test]
async fn computes_two_night_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;

    let booking = BookingService::new(db)
        .create(user.id, room.id, "01/12/2025", "03/12/2025", Decimal::from(100))
        .await
        .unwrap();

    assert_eq!(booking.total_amount, Decimal::from(200));
    assert_eq!(booking.nightly_rate, Decimal::from(100));
    assert_eq!(booking.status, BookingStatus::Pending);
    assert!(booking.booking_code.starts_with("BK-"));
    assert_eq!(
        booking.check_in,
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    );
    assert_eq!(
        booking.check_out,
        NaiveDate::from_ymd_opt(2025, 12, 3).unwrap()
    );

    Ok(())
}

/// Tests the one-night floor.
///
/// Same-day and inverted date ranges still charge one night.
#[tokio::test]
async fn floors_nights_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;

    let service = BookingService::new(db);

    let same_day = service
        .create(user.id, room.id, "05/12/2025", "05/12/2025", Decimal::from(80))
        .await
        .unwrap();
    assert_eq!(same_day.total_amount, Decimal::from(80));

    let inverted = service
        .create(user.id, room.id, "10/12/2025", "08/12/2025", Decimal::from(80))
        .await
        .unwrap();
    assert_eq!(inverted.total_amount, Decimal::from(80));

    Ok(())
}

/// Tests rejection of unparseable dates.
#[tokio::test]
async fn rejects_invalid_date_format() {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db)
        .create(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "2025-12-01",
            "2025-12-03",
            Decimal::from(100),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests rejection of a missing/zero nightly rate.
#[tokio::test]
async fn rejects_non_positive_rate() {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db)
        .create(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "01/12/2025",
            "03/12/2025",
            Decimal::ZERO,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[test]
fn nights_between_is_calendar_difference_floored_at_one() {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();

    assert_eq!(BookingService::nights_between(d(2025, 12, 1), d(2025, 12, 3)), 2);
    assert_eq!(BookingService::nights_between(d(2025, 12, 1), d(2025, 12, 2)), 1);
    assert_eq!(BookingService::nights_between(d(2025, 12, 1), d(2025, 12, 1)), 1);
    assert_eq!(BookingService::nights_between(d(2025, 12, 3), d(2025, 12, 1)), 1);
}
