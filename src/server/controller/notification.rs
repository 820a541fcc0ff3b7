use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::MessageDto,
        notification::{CreateNotificationDto, NotificationDto, UnreadCountDto},
    },
    server::{
        data::notification::NotificationRepository,
        error::AppError,
        middleware::auth::{AuthGuard, STAFF_ROLES},
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct NotificationListQuery {
    pub user_id: Option<Uuid>,
}

/// GET /api/notifications
/// Notifications, newest first, optionally for one user.
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NotificationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let notifications = NotificationRepository::new(&state.db)
        .get_all(query.user_id)
        .await?;

    let dtos: Vec<NotificationDto> = notifications
        .into_iter()
        .map(NotificationDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/notifications/unread-count
/// Number of unread notifications for the caller.
pub async fn get_unread_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let unread = NotificationRepository::new(&state.db)
        .count_unread(user.id)
        .await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { unread })))
}

/// GET /api/notifications/{id}
pub async fn get_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let notification = NotificationRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    Ok((StatusCode::OK, Json(NotificationDto::from_entity(notification))))
}

/// POST /api/notifications
/// Create a notification (admin/staff). Without a user id it is a broadcast.
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.title.trim().is_empty() || dto.content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    let notification = NotificationRepository::new(&state.db)
        .create(dto.title, dto.content, dto.user_id, dto.kind)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NotificationDto::from_entity(notification)),
    ))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_read_flag(state, headers, id, true).await
}

/// PUT /api/notifications/{id}/unread
pub async fn mark_notification_unread(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_read_flag(state, headers, id, false).await
}

async fn set_read_flag(
    state: AppState,
    headers: HeaderMap,
    id: i32,
    is_read: bool,
) -> Result<(StatusCode, Json<NotificationDto>), AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let notification = NotificationRepository::new(&state.db)
        .set_read(id, is_read)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    Ok((StatusCode::OK, Json(NotificationDto::from_entity(notification))))
}

/// PUT /api/notifications/read-all
/// Mark all of the caller's notifications as read.
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, &[])
        .await?;

    let updated = NotificationRepository::new(&state.db)
        .mark_all_read(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("{} notifications marked as read", updated),
        }),
    ))
}
