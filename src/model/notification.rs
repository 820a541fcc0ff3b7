use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: Option<Uuid>,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NotificationDto {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            content: entity.content,
            kind: entity.kind,
            is_read: entity.is_read,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateNotificationDto {
    pub title: String,
    pub content: String,
    pub user_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UnreadCountDto {
    pub unread: u64,
}
