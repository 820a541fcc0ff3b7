use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ContactDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub reply: Option<String>,
    pub replied_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactDto {
    pub fn from_entity(entity: entity::contact::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            subject: entity.subject,
            message: entity.message,
            status: entity.status,
            reply: entity.reply,
            replied_at: entity.replied_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateContactDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ReplyContactDto {
    pub reply: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateContactStatusDto {
    pub status: String,
}
