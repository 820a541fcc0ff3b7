//! Discount factory for creating test discount entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use entity::discount::{DiscountStatus, DiscountType};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test discounts with customizable fields.
///
/// Defaults to an active 10% voucher valid from yesterday for thirty days
/// with a limit of 100 redemptions.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discount::DiscountFactory;
/// use entity::discount::DiscountType;
///
/// let discount = DiscountFactory::new(&db)
///     .discount_type(DiscountType::Fixed)
///     .value(Decimal::from(50))
///     .usage_limit(Some(1))
///     .build()
///     .await?;
/// ```
pub struct DiscountFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    discount_type: DiscountType,
    value: Decimal,
    usage_limit: Option<i32>,
    usage_used: i32,
    valid_from: chrono::DateTime<Utc>,
    valid_until: chrono::DateTime<Utc>,
    status: DiscountStatus,
}

impl<'a> DiscountFactory<'a> {
    /// Creates a new DiscountFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        Self {
            db,
            code: format!("SAVE{}", next_id()),
            discount_type: DiscountType::Percent,
            value: Decimal::from(10),
            usage_limit: Some(100),
            usage_used: 0,
            valid_from: now - Duration::days(1),
            valid_until: now + Duration::days(30),
            status: DiscountStatus::Active,
        }
    }

    /// Sets the voucher code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the discount type.
    pub fn discount_type(mut self, discount_type: DiscountType) -> Self {
        self.discount_type = discount_type;
        self
    }

    /// Sets the discount value.
    pub fn value(mut self, value: Decimal) -> Self {
        self.value = value;
        self
    }

    /// Sets the usage limit. None means unlimited.
    pub fn usage_limit(mut self, usage_limit: Option<i32>) -> Self {
        self.usage_limit = usage_limit;
        self
    }

    /// Sets the current usage count.
    pub fn usage_used(mut self, usage_used: i32) -> Self {
        self.usage_used = usage_used;
        self
    }

    /// Sets the validity window.
    pub fn valid_between(
        mut self,
        valid_from: chrono::DateTime<Utc>,
        valid_until: chrono::DateTime<Utc>,
    ) -> Self {
        self.valid_from = valid_from;
        self.valid_until = valid_until;
        self
    }

    /// Sets the discount status.
    pub fn status(mut self, status: DiscountStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the discount entity into the database.
    pub async fn build(self) -> Result<entity::discount::Model, DbErr> {
        let now = Utc::now();
        entity::discount::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            code: ActiveValue::Set(self.code.clone()),
            name: ActiveValue::Set(format!("Voucher {}", self.code)),
            description: ActiveValue::Set(None),
            discount_type: ActiveValue::Set(self.discount_type),
            value: ActiveValue::Set(self.value),
            usage_limit: ActiveValue::Set(self.usage_limit),
            usage_used: ActiveValue::Set(self.usage_used),
            valid_from: ActiveValue::Set(self.valid_from),
            valid_until: ActiveValue::Set(self.valid_until),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active 10% discount with default values.
pub async fn create_discount(db: &DatabaseConnection) -> Result<entity::discount::Model, DbErr> {
    DiscountFactory::new(db).build().await
}
