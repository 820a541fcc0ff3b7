use crate::server::{data::payment::PaymentRepository, model::payment::CreatePaymentParams};
use chrono::Utc;
use entity::payment::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod refund;
