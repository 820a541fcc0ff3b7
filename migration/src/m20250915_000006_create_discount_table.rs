use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discounts::Table)
                    .if_not_exists()
                    .col(pk_uuid(Discounts::Id))
                    .col(string_uniq(Discounts::Code))
                    .col(string(Discounts::Name))
                    .col(text_null(Discounts::Description))
                    .col(string_len(Discounts::DiscountType, 20))
                    .col(decimal(Discounts::Value))
                    .col(integer_null(Discounts::UsageLimit))
                    .col(integer(Discounts::UsageUsed).default(0))
                    .col(timestamp_with_time_zone(Discounts::ValidFrom))
                    .col(timestamp_with_time_zone(Discounts::ValidUntil))
                    .col(string_len(Discounts::Status, 20))
                    .col(
                        timestamp_with_time_zone(Discounts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Discounts::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Discounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Discounts {
    Table,
    Id,
    Code,
    Name,
    Description,
    DiscountType,
    Value,
    UsageLimit,
    UsageUsed,
    ValidFrom,
    ValidUntil,
    Status,
    CreatedAt,
    UpdatedAt,
}
