use sea_orm_migration::{prelude::*, schema::*};

use super::m20250915_000004_create_room_table::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomDetails::Id))
                    .col(uuid_uniq(RoomDetails::RoomId))
                    .col(text(RoomDetails::Description))
                    .col(json_binary(RoomDetails::Features))
                    .col(json_binary(RoomDetails::ImagesUrl))
                    .col(string(RoomDetails::NumBed))
                    .col(decimal_null(RoomDetails::PricePerNight))
                    .col(
                        timestamp_with_time_zone(RoomDetails::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(RoomDetails::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_detail_room_id")
                            .from(RoomDetails::Table, RoomDetails::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomDetails {
    Table,
    Id,
    RoomId,
    Description,
    Features,
    ImagesUrl,
    NumBed,
    PricePerNight,
    CreatedAt,
    UpdatedAt,
}
