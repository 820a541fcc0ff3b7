use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250915_000002_create_resort_table::Resorts,
    m20250915_000003_create_room_type_table::RoomTypes,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(pk_uuid(Rooms::Id))
                    .col(integer(Rooms::ResortId))
                    .col(uuid(Rooms::RoomTypeId))
                    .col(string(Rooms::Location))
                    .col(string(Rooms::Address))
                    .col(string_len(Rooms::Status, 20))
                    .col(string(Rooms::Category))
                    .col(
                        timestamp_with_time_zone(Rooms::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Rooms::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_resort_id")
                            .from(Rooms::Table, Rooms::ResortId)
                            .to(Resorts::Table, Resorts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_room_type_id")
                            .from(Rooms::Table, Rooms::RoomTypeId)
                            .to(RoomTypes::Table, RoomTypes::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rooms {
    Table,
    Id,
    ResortId,
    RoomTypeId,
    Location,
    Address,
    Status,
    Category,
    CreatedAt,
    UpdatedAt,
}
