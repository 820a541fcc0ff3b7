use super::*;
use entity::prelude::User;

/// Tests creating an account and the uniqueness probes used before insert.
#[tokio::test]
async fn creates_user_and_detects_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .create(CreateUserParams {
            username: "frontdesk".to_string(),
            email: "frontdesk@example.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: "Front Desk".to_string(),
            phone: None,
            role: UserRole::Staff,
        })
        .await?;

    assert_eq!(user.role, UserRole::Staff);
    assert!(user.is_active);

    assert!(repo.username_taken("frontdesk", None).await?);
    assert!(repo.email_taken("frontdesk@example.com", None).await?);
    assert!(!repo.username_taken("reception", None).await?);

    // The same values don't count as taken when the probe excludes the
    // account being updated.
    assert!(!repo.username_taken("frontdesk", Some(user.id)).await?);
    assert!(!repo.email_taken("frontdesk@example.com", Some(user.id)).await?);

    Ok(())
}

/// Tests username lookup for the login path.
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("nightauditor")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_username("nightauditor").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    assert!(repo.find_by_username("ghost").await?.is_none());

    Ok(())
}
