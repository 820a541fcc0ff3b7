use chrono::{DateTime, Utc};
use entity::payment::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Parameters for inserting a payment row. The row is always inserted as
/// pending; settlement happens in the same transaction.
#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub transaction_code: String,
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub payment_method: PaymentMethod,
    /// Post-discount amount.
    pub amount: Decimal,
    pub discount_id: Option<Uuid>,
}

/// Filter for the admin payment list.
#[derive(Debug, Clone, Default)]
pub struct PaymentListFilter {
    pub status: Option<PaymentStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub limit: u64,
    pub offset: u64,
}

/// Optional date range shared by the stats and by-method aggregations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}
