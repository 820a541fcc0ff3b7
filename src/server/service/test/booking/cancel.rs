use super::*;

/// Tests the happy cancellation path.
///
/// A pending booking cancelled inside the 24 hour window moves to cancelled
/// and its room returns to available.
#[tokio::test]
async fn cancels_pending_booking_and_releases_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, resort, room_type, _room) =
        factory::helpers::create_booking_dependencies(db).await?;
    let room = factory::room::RoomFactory::new(db, resort.id, room_type.id)
        .status(RoomStatus::Reserved)
        .build()
        .await?;
    let booking = factory::booking::create_booking(db, user.id, room.id).await?;

    let cancelled = BookingService::new(db)
        .cancel(user.id, booking.id)
        .await
        .unwrap();

    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    let room = crate::server::data::room::RoomRepository::new(db)
        .find_by_id(room.id)
        .await?
        .unwrap();
    assert_eq!(room.status, RoomStatus::Available);

    Ok(())
}

/// Tests the ownership check: cancelling someone else's booking is 403.
#[tokio::test]
async fn rejects_foreign_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let result = BookingService::new(db).cancel(stranger.id, booking.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests the 24 hour cancellation window.
///
/// A booking created 30 hours ago can no longer be cancelled even though it
/// is still pending.
#[tokio::test]
async fn rejects_cancellation_after_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, room.id)
        .created_at(Utc::now() - Duration::hours(30))
        .build()
        .await?;

    let result = BookingService::new(db).cancel(user.id, booking.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the status precondition: a checked-in booking cannot be cancelled.
#[tokio::test]
async fn rejects_cancellation_outside_cancellable_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::CheckedIn)
        .build()
        .await?;

    let result = BookingService::new(db).cancel(user.id, booking.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the missing-booking case.
#[tokio::test]
async fn rejects_unknown_booking() {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db)
        .cancel(Uuid::new_v4(), Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
