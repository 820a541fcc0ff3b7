use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::review::{CreateReviewDto, CreateReviewReplyDto, ReviewDto, ReviewReplyDto},
    server::{
        data::{review::ReviewRepository, room::RoomRepository},
        error::AppError,
        middleware::auth::{AuthGuard, STAFF_ROLES},
        state::AppState,
    },
};

/// GET /api/reviews/room/{room_id}
/// All reviews for a room, newest first.
pub async fn get_room_reviews(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewRepository::new(&state.db)
        .find_by_room(room_id)
        .await?;

    let dtos: Vec<ReviewDto> = reviews.into_iter().map(ReviewDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/reviews
/// Leave a review. Anonymous reviews are allowed; the rating must be 1-5.
pub async fn create_review(
    State(state): State<AppState>,
    Json(dto): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    if !(1..=5).contains(&dto.rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    if dto.comment.trim().is_empty() {
        return Err(AppError::BadRequest("Comment is required".to_string()));
    }

    if RoomRepository::new(&state.db)
        .find_by_id(dto.room_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Room not found".to_string()));
    }

    let review = ReviewRepository::new(&state.db)
        .create(
            dto.room_id,
            dto.username.unwrap_or_else(|| "Anonymous guest".to_string()),
            dto.rating,
            dto.comment,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewDto::from_entity(review))))
}

/// GET /api/reviews/{id}/replies
/// Replies to a review, oldest first.
pub async fn get_review_replies(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ReviewRepository::new(&state.db);

    if !repo.exists(id).await? {
        return Err(AppError::NotFound("Review not found".to_string()));
    }

    let replies = repo.find_replies(id).await?;

    let dtos: Vec<ReviewReplyDto> = replies
        .into_iter()
        .map(ReviewReplyDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/reviews/{id}/replies
/// Reply to a review (admin/staff).
pub async fn create_review_reply(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<CreateReviewReplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.reply_content.trim().is_empty() {
        return Err(AppError::BadRequest("Reply content is required".to_string()));
    }

    let repo = ReviewRepository::new(&state.db);

    if !repo.exists(id).await? {
        return Err(AppError::NotFound("Review not found".to_string()));
    }

    let reply = repo
        .create_reply(
            id,
            dto.username.unwrap_or(user.username),
            dto.reply_content,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewReplyDto::from_entity(reply))))
}

/// DELETE /api/reviews/{id}
/// Remove a review (admin/staff).
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let deleted = ReviewRepository::new(&state.db)
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

    Ok((StatusCode::OK, Json(ReviewDto::from_entity(deleted))))
}

/// DELETE /api/reviews/replies/{id}
/// Remove a reply (admin/staff).
pub async fn delete_review_reply(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let deleted = ReviewRepository::new(&state.db)
        .delete_reply(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reply not found".to_string()))?;

    Ok((StatusCode::OK, Json(ReviewReplyDto::from_entity(deleted))))
}
