use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resorts::Table)
                    .if_not_exists()
                    .col(pk_auto(Resorts::Id))
                    .col(string(Resorts::Name))
                    .col(
                        timestamp_with_time_zone(Resorts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Resorts::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resorts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resorts {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
