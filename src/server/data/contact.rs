//! Contact message repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

pub struct ContactRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContactRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        subject: Option<String>,
        message: String,
    ) -> Result<entity::contact::Model, DbErr> {
        let now = Utc::now();
        entity::contact::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(phone),
            subject: ActiveValue::Set(subject),
            message: ActiveValue::Set(message),
            status: ActiveValue::Set("new".to_string()),
            reply: ActiveValue::Set(None),
            replied_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all contact messages, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::contact::Model>, DbErr> {
        entity::prelude::Contact::find()
            .order_by_desc(entity::contact::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::contact::Model>, DbErr> {
        entity::prelude::Contact::find_by_id(id).one(self.db).await
    }

    /// Records a reply: stores the text, stamps the reply time and moves the
    /// message to the replied state.
    pub async fn reply(
        &self,
        id: i32,
        reply: String,
    ) -> Result<Option<entity::contact::Model>, DbErr> {
        let Some(contact) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active: entity::contact::ActiveModel = contact.into();
        active.reply = ActiveValue::Set(Some(reply));
        active.replied_at = ActiveValue::Set(Some(now));
        active.status = ActiveValue::Set("replied".to_string());
        active.updated_at = ActiveValue::Set(now);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: String,
    ) -> Result<Option<entity::contact::Model>, DbErr> {
        let Some(contact) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::contact::ActiveModel = contact.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }
}
