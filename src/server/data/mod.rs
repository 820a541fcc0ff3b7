//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each table in the application. Repositories are generic over SeaORM's
//! `ConnectionTrait` so the same methods run against the shared pool or inside
//! a `DatabaseTransaction` for the invariant-bearing flows (payments, refunds,
//! cancellations, status updates).

pub mod booking;
pub mod contact;
pub mod discount;
pub mod notification;
pub mod payment;
pub mod resort;
pub mod review;
pub mod room;
pub mod room_type;
pub mod user;

#[cfg(test)]
mod test;
