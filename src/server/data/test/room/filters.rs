use super::*;

/// Tests the optional room list filters.
///
/// Covers the resort filter, the case-insensitive location substring match
/// and the exact room type name match.
#[tokio::test]
async fn filters_rooms_by_resort_location_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resort_a = factory::resort::create_resort(db).await?;
    let resort_b = factory::resort::create_resort(db).await?;
    let deluxe = factory::room_type::create_room_type(db).await?;
    let standard = factory::room_type::create_room_type(db).await?;

    let beachfront = factory::room::RoomFactory::new(db, resort_a.id, deluxe.id)
        .location("Beachfront North")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, resort_b.id, standard.id)
        .location("Garden Wing")
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    let by_resort = repo
        .get_filtered(&RoomFilter {
            resort_id: Some(resort_a.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_resort.len(), 1);
    assert_eq!(by_resort[0].id, beachfront.id);

    let by_location = repo
        .get_filtered(&RoomFilter {
            location: Some("beachfront".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_location.len(), 1);
    assert_eq!(by_location[0].id, beachfront.id);

    let by_type = repo
        .get_filtered(&RoomFilter {
            room_type: Some(deluxe.name.clone()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0].id, beachfront.id);

    let all = repo.get_filtered(&RoomFilter::default()).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests the bookings-exist guard that blocks room deletion.
#[tokio::test]
async fn detects_bookings_referencing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, resort, room_type, room) =
        factory::helpers::create_booking_dependencies(db).await?;
    let empty_room = factory::room::create_room(db, resort.id, room_type.id).await?;
    factory::booking::create_booking(db, user.id, room.id).await?;

    let repo = RoomRepository::new(db);

    assert!(repo.has_bookings(room.id).await?);
    assert!(!repo.has_bookings(empty_room.id).await?);

    Ok(())
}
