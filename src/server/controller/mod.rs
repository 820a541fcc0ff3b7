//! HTTP request handlers.
//!
//! Controllers authenticate through the auth guard, validate input, call the
//! service layer (or a repository directly for single-statement operations),
//! and shape the JSON response.

pub mod auth;
pub mod booking;
pub mod contact;
pub mod discount;
pub mod notification;
pub mod param;
pub mod payment;
pub mod resort;
pub mod revenue;
pub mod review;
pub mod room;
pub mod room_type;
pub mod user;
