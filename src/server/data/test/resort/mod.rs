use crate::server::data::resort::ResortRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
