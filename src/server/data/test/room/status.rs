use super::*;

/// Tests the status mutation driven by booking transitions.
#[tokio::test]
async fn sets_room_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resort = factory::resort::create_resort(db).await?;
    let room_type = factory::room_type::create_room_type(db).await?;
    let room = factory::room::create_room(db, resort.id, room_type.id).await?;
    assert_eq!(room.status, RoomStatus::Available);

    let repo = RoomRepository::new(db);
    repo.set_status(room.id, RoomStatus::Occupied).await?;

    let reloaded = repo.find_by_id(room.id).await?.unwrap();
    assert_eq!(reloaded.status, RoomStatus::Occupied);

    Ok(())
}
