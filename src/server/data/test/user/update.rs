use super::*;
use entity::prelude::User;

/// Tests the partial account update.
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                role: Some(UserRole::Manager),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.role, UserRole::Manager);
    assert!(!updated.is_active);
    assert_eq!(updated.username, user.username);
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests the password hash replacement.
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id, "new-hash".to_string()).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.password_hash, "new-hash");
    assert!(reloaded.updated_at >= user.updated_at);

    Ok(())
}

/// Tests account deletion.
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(!repo.delete(user.id).await?);

    Ok(())
}
