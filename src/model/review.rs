use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub room_id: Uuid,
    pub username: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewDto {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            username: entity.username,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub room_id: Uuid,
    /// Defaults to an anonymous guest name when omitted.
    pub username: Option<String>,
    pub rating: i32,
    pub comment: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewReplyDto {
    pub id: i32,
    pub review_id: i32,
    pub username: String,
    pub reply_content: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewReplyDto {
    pub fn from_entity(entity: entity::review_reply::Model) -> Self {
        Self {
            id: entity.id,
            review_id: entity.review_id,
            username: entity.username,
            reply_content: entity.reply_content,
            created_at: entity.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateReviewReplyDto {
    pub username: Option<String>,
    pub reply_content: String,
}
