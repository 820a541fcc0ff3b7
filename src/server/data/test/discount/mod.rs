use crate::server::{data::discount::DiscountRepository, model::discount::UpdateDiscountParams};
use chrono::{Duration, Utc};
use entity::discount::DiscountStatus;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod find_valid;
mod increment_usage;
mod update;
