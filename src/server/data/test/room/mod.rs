use crate::server::{
    data::room::RoomRepository,
    model::room::{RoomDetailParams, RoomFilter},
};
use entity::room::RoomStatus;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod detail;
mod filters;
mod status;
