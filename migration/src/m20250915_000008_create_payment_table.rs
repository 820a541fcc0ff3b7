use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250915_000001_create_user_table::Users, m20250915_000006_create_discount_table::Discounts,
    m20250915_000007_create_booking_table::Bookings,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_uuid(Payments::Id))
                    .col(string_uniq(Payments::TransactionCode))
                    .col(uuid(Payments::BookingId))
                    .col(uuid(Payments::UserId))
                    .col(string_len(Payments::PaymentMethod, 20))
                    .col(decimal(Payments::Amount))
                    .col(uuid_null(Payments::DiscountId))
                    .col(string_len(Payments::Status, 20))
                    .col(
                        timestamp_with_time_zone(Payments::TransactionDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Payments::PaidAt))
                    .col(decimal_null(Payments::RefundAmount))
                    .col(timestamp_with_time_zone_null(Payments::RefundedAt))
                    .col(text_null(Payments::RefundReason))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_booking_id")
                            .from(Payments::Table, Payments::BookingId)
                            .to(Bookings::Table, Bookings::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_user_id")
                            .from(Payments::Table, Payments::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_discount_id")
                            .from(Payments::Table, Payments::DiscountId)
                            .to(Discounts::Table, Discounts::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payments {
    Table,
    Id,
    TransactionCode,
    BookingId,
    UserId,
    PaymentMethod,
    Amount,
    DiscountId,
    Status,
    TransactionDate,
    PaidAt,
    RefundAmount,
    RefundedAt,
    RefundReason,
}
