use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ResortDto {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResortDto {
    pub fn from_entity(entity: entity::resort::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateResortDto {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateResortDto {
    pub name: String,
}
