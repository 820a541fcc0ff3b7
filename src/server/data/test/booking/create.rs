use super::*;

/// Tests creating a booking row.
///
/// Verifies that the repository inserts the booking with the provided code,
/// dates and amounts, and that new bookings always start out pending.
///
/// Expected: Ok with a pending booking
#[tokio::test]
async fn creates_booking_with_pending_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParams {
            booking_code: "BK-TESTCODE".to_string(),
            user_id: user.id,
            room_id: room.id,
            check_in: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 12, 3).unwrap(),
            nightly_rate: Decimal::from(100),
            total_amount: Decimal::from(200),
        })
        .await?;

    assert_eq!(booking.booking_code, "BK-TESTCODE");
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.total_amount, Decimal::from(200));

    Ok(())
}
