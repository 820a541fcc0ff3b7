use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::ActiveEnum;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{ChangePasswordDto, CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, STAFF_ROLES},
        model::user::{CreateUserParams, UpdateUserParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

fn parse_role(value: Option<String>) -> Result<entity::user::UserRole, AppError> {
    match value {
        None => Ok(entity::user::UserRole::Guest),
        Some(v) => entity::user::UserRole::try_from_value(&v)
            .map_err(|_| AppError::BadRequest("Invalid role".to_string())),
    }
}

/// Get all user accounts (admin/staff).
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let users = UserRepository::new(&state.db).get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(UserDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one user account (admin/staff).
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let user = UserRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(user))))
}

/// Create a user account (admin/staff).
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 409, description = "Username or email already exists", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.username.trim().is_empty() || dto.full_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "username, email, password and full_name are required".to_string(),
        ));
    }
    if !crate::server::util::validate::is_valid_email(&dto.email) {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }
    if dto.password.len() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters long".to_string(),
        ));
    }

    let role = parse_role(dto.role)?;

    let repo = UserRepository::new(&state.db);

    if repo.email_taken(&dto.email, None).await? {
        return Err(AppError::Conflict("Email already exists".to_string()));
    }
    if repo.username_taken(&dto.username, None).await? {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    let user = repo
        .create(CreateUserParams {
            username: dto.username,
            email: dto.email,
            password_hash: AuthService::hash_password(&dto.password)?,
            full_name: dto.full_name,
            phone: dto.phone,
            role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from_entity(user))))
}

/// Update a user account (admin/staff). Absent fields keep their value.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Nothing to update or invalid value", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username or email already exists", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.username.is_none()
        && dto.email.is_none()
        && dto.full_name.is_none()
        && dto.phone.is_none()
        && dto.role.is_none()
        && dto.is_active.is_none()
    {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    let repo = UserRepository::new(&state.db);

    if let Some(ref email) = dto.email {
        if !crate::server::util::validate::is_valid_email(email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }
        if repo.email_taken(email, Some(id)).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }
    }
    if let Some(ref username) = dto.username {
        if repo.username_taken(username, Some(id)).await? {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
    }

    let role = dto
        .role
        .map(|r| {
            entity::user::UserRole::try_from_value(&r)
                .map_err(|_| AppError::BadRequest("Invalid role".to_string()))
        })
        .transpose()?;

    let user = repo
        .update(
            id,
            UpdateUserParams {
                username: dto.username,
                email: dto.email,
                full_name: dto.full_name,
                phone: dto.phone,
                role,
                is_active: dto.is_active,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(user))))
}

/// Change a user's password after verifying the old one.
#[utoipa::path(
    put,
    path = "/api/users/{id}/change-password",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Old password incorrect", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(dto): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    if dto.old_password.is_empty() || dto.new_password.is_empty() {
        return Err(AppError::BadRequest(
            "old_password and new_password are required".to_string(),
        ));
    }
    if dto.new_password.len() < 6 {
        return Err(AppError::BadRequest(
            "New password must be at least 6 characters long".to_string(),
        ));
    }

    let repo = UserRepository::new(&state.db);

    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !AuthService::verify_password(&dto.old_password, &user.password_hash) {
        return Err(AuthError::InvalidCredentials.into());
    }

    repo.update_password(id, AuthService::hash_password(&dto.new_password)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password updated successfully".to_string(),
        }),
    ))
}

/// Delete a user account (admin/staff).
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if !UserRepository::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted successfully".to_string(),
        }),
    ))
}
