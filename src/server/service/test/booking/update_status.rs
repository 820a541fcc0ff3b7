use super::*;
use crate::server::data::room::RoomRepository;

async fn room_status(
    db: &sea_orm::DatabaseConnection,
    room_id: Uuid,
) -> Result<RoomStatus, DbErr> {
    Ok(RoomRepository::new(db)
        .find_by_id(room_id)
        .await?
        .unwrap()
        .status)
}

/// Tests the full booking-to-room synchronization map.
///
/// confirmed -> reserved, checked_in -> occupied, checked_out -> available,
/// cancelled -> available.
#[tokio::test]
async fn applies_room_status_map() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::create_booking(db, user.id, room.id).await?;

    let service = BookingService::new(db);

    let updated = service.update_status(booking.id, "confirmed").await.unwrap();
    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert_eq!(room_status(db, room.id).await?, RoomStatus::Reserved);

    service.update_status(booking.id, "checked_in").await.unwrap();
    assert_eq!(room_status(db, room.id).await?, RoomStatus::Occupied);

    service.update_status(booking.id, "checked_out").await.unwrap();
    assert_eq!(room_status(db, room.id).await?, RoomStatus::Available);

    service.update_status(booking.id, "cancelled").await.unwrap();
    assert_eq!(room_status(db, room.id).await?, RoomStatus::Available);

    Ok(())
}

/// Tests that statuses outside the admin set are rejected.
///
/// pending and completed are valid booking statuses but not valid targets
/// for this endpoint, and unknown strings fail the same way.
#[tokio::test]
async fn rejects_statuses_outside_admin_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::booking::create_booking(db, user.id, room.id).await?;

    let service = BookingService::new(db);

    for status in ["pending", "completed", "paused", ""] {
        let result = service.update_status(booking.id, status).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "status {:?} should be rejected",
            status
        );
    }

    // The booking is untouched after the rejected attempts.
    let reloaded = crate::server::data::booking::BookingRepository::new(db)
        .find_by_id(booking.id)
        .await?
        .unwrap();
    assert_eq!(reloaded.status, BookingStatus::Pending);

    Ok(())
}

/// Tests the missing-booking case.
#[tokio::test]
async fn rejects_unknown_booking() {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db)
        .update_status(Uuid::new_v4(), "confirmed")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
