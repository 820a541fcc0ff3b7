use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomTypes::Table)
                    .if_not_exists()
                    .col(pk_uuid(RoomTypes::Id))
                    .col(string(RoomTypes::Name))
                    .col(decimal(RoomTypes::PricePerNight))
                    .col(
                        timestamp_with_time_zone(RoomTypes::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomTypes {
    Table,
    Id,
    Name,
    PricePerNight,
    CreatedAt,
}
