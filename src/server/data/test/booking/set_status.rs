use super::*;

/// Tests the status update used by the booking lifecycle paths.
///
/// Verifies the status changes, updated_at moves forward, and a missing
/// booking yields None.
#[tokio::test]
async fn updates_status_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, room.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let updated = repo
        .set_status(booking.id, BookingStatus::Confirmed)
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert!(updated.updated_at > booking.updated_at);

    let missing = repo.set_status(Uuid::new_v4(), BookingStatus::Confirmed).await?;
    assert!(missing.is_none());

    Ok(())
}
