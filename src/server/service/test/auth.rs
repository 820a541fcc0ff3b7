use entity::prelude::User;
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        error::{auth::AuthError, AppError},
        service::auth::AuthService,
        state::AuthConfig,
    },
};

fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".to_string(),
        test_mode: false,
        test_user_id: Uuid::new_v4(),
    }
}

fn register_dto(username: &str, email: &str) -> RegisterDto {
    RegisterDto {
        username: username.to_string(),
        email: email.to_string(),
        password: "hunter22".to_string(),
        full_name: Some("Test Guest".to_string()),
        phone: None,
    }
}

/// Tests registration: the account lands as an active guest with a hashed
/// password, and the returned token is non-empty.
#[tokio::test]
async fn registers_guest_with_hashed_password() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_config();
    let (user, token) = AuthService::new(db, &auth)
        .register(register_dto("newguest", "newguest@example.com"))
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Guest);
    assert!(user.is_active);
    assert_ne!(user.password_hash, "hunter22");
    assert!(AuthService::verify_password("hunter22", &user.password_hash));
    assert!(!token.is_empty());

    Ok(())
}

/// Tests the duplicate-account conflict.
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let auth = test_config();
    let result = AuthService::new(db, &auth)
        .register(register_dto("taken", "other@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registration input validation: bad email and short password.
#[tokio::test]
async fn rejects_invalid_registration_input() {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_config();
    let service = AuthService::new(db, &auth);

    let bad_email = service
        .register(register_dto("someone", "not-an-email"))
        .await;
    assert!(matches!(bad_email, Err(AppError::BadRequest(_))));

    let mut short = register_dto("someone", "someone@example.com");
    short.password = "abc".to_string();
    assert!(matches!(
        service.register(short).await,
        Err(AppError::BadRequest(_))
    ));
}

/// Tests login against a registered account, including the wrong-password
/// and unknown-user rejections.
#[tokio::test]
async fn logs_in_with_correct_credentials_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_config();
    let service = AuthService::new(db, &auth);

    service
        .register(register_dto("returning", "returning@example.com"))
        .await
        .unwrap();

    let (user, token) = service
        .login(LoginDto {
            username: "returning".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.username, "returning");
    assert!(!token.is_empty());

    let wrong = service
        .login(LoginDto {
            username: "returning".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service
        .login(LoginDto {
            username: "nobody".to_string(),
            password: "hunter22".to_string(),
        })
        .await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
