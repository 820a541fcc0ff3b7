use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AuthUserDto {
    pub id: Uuid,
    pub username: String,
    #[schema(value_type = String)]
    pub role: entity::user::UserRole,
}

/// Returned by both login and register: a signed bearer token plus the
/// identity it represents.
#[derive(Serialize, ToSchema)]
pub struct AuthResponseDto {
    pub message: String,
    pub token: String,
    pub user: AuthUserDto,
}
