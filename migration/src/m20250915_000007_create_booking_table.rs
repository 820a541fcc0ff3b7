use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250915_000001_create_user_table::Users, m20250915_000004_create_room_table::Rooms,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_uuid(Bookings::Id))
                    .col(string_uniq(Bookings::BookingCode))
                    .col(uuid(Bookings::UserId))
                    .col(uuid(Bookings::RoomId))
                    .col(date(Bookings::CheckIn))
                    .col(date(Bookings::CheckOut))
                    .col(decimal(Bookings::NightlyRate))
                    .col(decimal(Bookings::TotalAmount))
                    .col(string_len(Bookings::Status, 20))
                    .col(
                        timestamp_with_time_zone(Bookings::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Bookings::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Bookings::Table, Bookings::RoomId)
                            .to(Rooms::Table, Rooms::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    BookingCode,
    UserId,
    RoomId,
    CheckIn,
    CheckOut,
    NightlyRate,
    TotalAmount,
    Status,
    CreatedAt,
    UpdatedAt,
}
