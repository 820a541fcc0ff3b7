//! Business logic layer.
//!
//! Services own the multi-step flows: the booking lifecycle with its room
//! synchronization, the payment/refund transactions, token issuance, and the
//! revenue aggregations. Single-statement CRUD goes from controllers straight
//! to the repositories.

pub mod auth;
pub mod booking;
pub mod payment;
pub mod revenue;

#[cfg(test)]
mod test;
