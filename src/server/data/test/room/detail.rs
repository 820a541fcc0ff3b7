use super::*;

/// Tests the room detail upsert used by the room update endpoint.
///
/// First call inserts the row, second call updates it in place.
#[tokio::test]
async fn upserts_room_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resort = factory::resort::create_resort(db).await?;
    let room_type = factory::room_type::create_room_type(db).await?;
    let room = factory::room::create_room(db, resort.id, room_type.id).await?;

    let repo = RoomRepository::new(db);

    assert!(repo.find_detail(room.id).await?.is_none());

    let inserted = repo
        .upsert_detail(
            room.id,
            RoomDetailParams {
                description: "Sea view".to_string(),
                num_bed: "1 king".to_string(),
                price_per_night: Some(Decimal::from(180)),
            },
        )
        .await?;
    assert_eq!(inserted.description, "Sea view");
    assert_eq!(inserted.price_per_night, Some(Decimal::from(180)));

    let updated = repo
        .upsert_detail(
            room.id,
            RoomDetailParams {
                description: "Sea view, renovated".to_string(),
                num_bed: "1 king".to_string(),
                price_per_night: None,
            },
        )
        .await?;
    assert_eq!(updated.id, inserted.id);
    assert_eq!(updated.description, "Sea view, renovated");
    assert!(updated.price_per_night.is_none());

    Ok(())
}
