use super::*;
use entity::prelude::Resort;

/// Tests basic resort create/update/delete.
#[tokio::test]
async fn creates_updates_and_deletes_resort() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resort).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResortRepository::new(db);

    let resort = repo.create("Palm Bay".to_string()).await?;
    assert_eq!(resort.name, "Palm Bay");

    let renamed = repo
        .update(resort.id, "Palm Bay Deluxe".to_string())
        .await?
        .unwrap();
    assert_eq!(renamed.name, "Palm Bay Deluxe");

    assert!(repo.delete(resort.id).await?);
    assert!(repo.find_by_id(resort.id).await?.is_none());
    assert!(!repo.delete(resort.id).await?);

    Ok(())
}

/// Tests the rooms-exist guard that blocks resort deletion.
#[tokio::test]
async fn detects_rooms_referencing_resort() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let resort = factory::resort::create_resort(db).await?;
    let empty_resort = factory::resort::create_resort(db).await?;
    let room_type = factory::room_type::create_room_type(db).await?;
    factory::room::create_room(db, resort.id, room_type.id).await?;

    let repo = ResortRepository::new(db);

    assert!(repo.has_rooms(resort.id).await?);
    assert!(!repo.has_rooms(empty_resort.id).await?);

    Ok(())
}
