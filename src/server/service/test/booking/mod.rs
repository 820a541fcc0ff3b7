use crate::server::{error::AppError, service::booking::BookingService};
use chrono::{Duration, NaiveDate, Utc};
use entity::booking::BookingStatus;
use entity::room::RoomStatus;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod cancel;
mod create;
mod update_status;
