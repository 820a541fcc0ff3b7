use crate::server::{
    data::{booking::BookingRepository, discount::DiscountRepository, room::RoomRepository},
    error::AppError,
    service::payment::PaymentService,
};
use chrono::Utc;
use entity::booking::BookingStatus;
use entity::discount::DiscountType;
use entity::payment::PaymentStatus;
use entity::room::RoomStatus;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod refund;
