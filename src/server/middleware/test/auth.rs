use axum::http::{header, HeaderMap, HeaderValue};
use entity::prelude::User;
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, STAFF_ROLES},
    service::auth::AuthService,
    state::AuthConfig,
};

fn test_config(test_mode: bool) -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".to_string(),
        test_mode,
        test_user_id: Uuid::new_v4(),
    }
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Tests the development bypass.
///
/// With test mode on, no token is required and the fixed admin identity is
/// injected.
#[tokio::test]
async fn test_mode_injects_admin_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_config(true);
    let user = AuthGuard::new(db, &auth)
        .require(&HeaderMap::new(), STAFF_ROLES)
        .await
        .unwrap();

    assert_eq!(user.id, auth.test_user_id);
    assert_eq!(user.role, UserRole::Admin);

    Ok(())
}

/// Tests that a missing Authorization header is a 401.
#[tokio::test]
async fn missing_token_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_config(false);
    let result = AuthGuard::new(db, &auth).require(&HeaderMap::new(), &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that an unverifiable token is a 401.
#[tokio::test]
async fn garbage_token_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_config(false);
    let result = AuthGuard::new(db, &auth)
        .require(&bearer_headers("not-a-jwt"), &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests the full happy path: a token issued by the auth service
/// authenticates the matching database user.
#[tokio::test]
async fn valid_token_authenticates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_config(false);
    let user = factory::user::create_user_with_role(db, UserRole::Staff).await?;
    let token = AuthService::new(db, &auth).issue_token(&user).unwrap();

    let authenticated = AuthGuard::new(db, &auth)
        .require(&bearer_headers(&token), STAFF_ROLES)
        .await
        .unwrap();

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.role, UserRole::Staff);

    Ok(())
}

/// Tests the role check: a guest with a valid token still gets 403 on a
/// staff-only route.
#[tokio::test]
async fn guest_is_denied_staff_routes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_config(false);
    let user = factory::user::create_user(db).await?;
    let token = AuthService::new(db, &auth).issue_token(&user).unwrap();

    let guard = AuthGuard::new(db, &auth);

    // Any-authenticated routes still admit the guest.
    assert!(guard.require(&bearer_headers(&token), &[]).await.is_ok());

    let denied = guard.require(&bearer_headers(&token), STAFF_ROLES).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests that a deactivated account is rejected even with a valid token.
#[tokio::test]
async fn inactive_account_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_config(false);
    let user = factory::user::UserFactory::new(db)
        .is_active(false)
        .build()
        .await?;
    let token = AuthService::new(db, &auth).issue_token(&user).unwrap();

    let result = AuthGuard::new(db, &auth)
        .require(&bearer_headers(&token), &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled(_)))
    ));

    Ok(())
}
