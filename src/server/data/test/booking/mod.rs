use crate::server::{
    data::booking::BookingRepository,
    model::booking::{BookingListFilter, CreateBookingParams},
};
use chrono::{Duration, NaiveDate, Utc};
use entity::booking::BookingStatus;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod count;
mod create;
mod get;
mod set_status;
