use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for paying a booking.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    pub booking_id: Uuid,
    /// One of cash, card, bank_transfer, e_wallet.
    pub payment_method: String,
    /// Raw amount before any discount is applied.
    pub amount: Decimal,
    pub discount_code: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PaymentDto {
    pub id: Uuid,
    pub transaction_code: String,
    pub amount: Decimal,
    #[schema(value_type = String)]
    pub payment_method: entity::payment::PaymentMethod,
    #[schema(value_type = String)]
    pub status: entity::payment::PaymentStatus,
    pub transaction_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl PaymentDto {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            transaction_code: entity.transaction_code,
            amount: entity.amount,
            payment_method: entity.payment_method,
            status: entity.status,
            transaction_date: entity.transaction_date,
            paid_at: entity.paid_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct PaymentCreatedDto {
    pub message: String,
    pub payment: PaymentDto,
}

/// One row of the caller's payment history.
#[derive(Serialize, ToSchema)]
pub struct MyPaymentDto {
    pub id: Uuid,
    pub transaction_code: String,
    pub amount: Decimal,
    #[schema(value_type = String)]
    pub payment_method: entity::payment::PaymentMethod,
    #[schema(value_type = String)]
    pub status: entity::payment::PaymentStatus,
    pub transaction_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub booking_code: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub resort_name: String,
    pub location: String,
}

/// Full payment detail joined with booking, guest, resort and voucher.
#[derive(Serialize, ToSchema)]
pub struct PaymentDetailDto {
    pub id: Uuid,
    pub transaction_code: String,
    pub amount: Decimal,
    #[schema(value_type = String)]
    pub payment_method: entity::payment::PaymentMethod,
    #[schema(value_type = String)]
    pub status: entity::payment::PaymentStatus,
    pub transaction_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub refund_amount: Option<Decimal>,
    pub refunded_at: Option<DateTime<Utc>>,
    pub booking_id: Uuid,
    pub booking_code: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub booking_total: Decimal,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resort_name: String,
    pub location: String,
    pub discount_code: Option<String>,
    pub discount_value: Option<Decimal>,
}

/// One row of the admin payment list.
#[derive(Serialize, ToSchema)]
pub struct AdminPaymentDto {
    pub id: Uuid,
    pub transaction_code: String,
    pub amount: Decimal,
    #[schema(value_type = String)]
    pub payment_method: entity::payment::PaymentMethod,
    #[schema(value_type = String)]
    pub status: entity::payment::PaymentStatus,
    pub transaction_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub booking_code: String,
    pub full_name: String,
    pub email: String,
    pub resort_name: String,
}

/// Request body for refunding a completed payment.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequestDto {
    pub refund_amount: Decimal,
    pub reason: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RefundResponseDto {
    pub message: String,
    pub refund_amount: Decimal,
}

/// Aggregate figures over the payments table.
#[derive(Serialize, ToSchema)]
pub struct PaymentStatsDto {
    pub total_payments: u64,
    pub total_users: u64,
    pub total_revenue: Decimal,
    pub total_refunded: Decimal,
    pub avg_payment_amount: Decimal,
}

#[derive(Serialize, ToSchema)]
pub struct PaymentsByMethodDto {
    #[schema(value_type = String)]
    pub payment_method: entity::payment::PaymentMethod,
    pub transaction_count: u64,
    pub total_amount: Decimal,
    pub avg_amount: Decimal,
}

/// Printable invoice for a completed payment.
#[derive(Serialize, ToSchema)]
pub struct InvoiceDto {
    pub payment_id: Uuid,
    pub transaction_code: String,
    pub amount: Decimal,
    #[schema(value_type = String)]
    pub payment_method: entity::payment::PaymentMethod,
    pub transaction_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub booking_code: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub booking_total: Decimal,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub resort_name: String,
    pub location: String,
    pub address: String,
    pub room_type: String,
    pub price_per_night: Decimal,
    pub discount_code: Option<String>,
    pub discount_description: Option<String>,
}
