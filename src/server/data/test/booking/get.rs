use super::*;

/// Tests fetching a booking by id.
///
/// Expected: Ok(Some) for an existing booking, Ok(None) for a random id
#[tokio::test]
async fn finds_booking_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);

    let found = repo.find_by_id(booking.id).await?;
    assert_eq!(found.map(|b| b.id), Some(booking.id));

    let missing = repo.find_by_id(Uuid::new_v4()).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the per-user booking history query.
///
/// Creates bookings for two users and verifies only the owner's bookings
/// come back, newest first.
#[tokio::test]
async fn gets_user_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;
    let other = factory::user::create_user(db).await?;

    let older = factory::booking::BookingFactory::new(db, user.id, room.id)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::booking::create_booking(db, user.id, room.id).await?;
    factory::booking::create_booking(db, other.id, room.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.find_by_user(user.id).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, newer.id);
    assert_eq!(bookings[1].id, older.id);

    Ok(())
}

/// Tests the admin list status filter and pagination.
#[tokio::test]
async fn filters_admin_list_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room) = factory::helpers::create_booking_dependencies(db).await?;

    factory::booking::create_booking(db, user.id, room.id).await?;
    factory::booking::BookingFactory::new(db, user.id, room.id)
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let confirmed = repo
        .get_all(&BookingListFilter {
            status: Some(BookingStatus::Confirmed),
            limit: 50,
            offset: 0,
        })
        .await?;
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].status, BookingStatus::Confirmed);

    let limited = repo
        .get_all(&BookingListFilter {
            status: None,
            limit: 1,
            offset: 0,
        })
        .await?;
    assert_eq!(limited.len(), 1);

    Ok(())
}
