//! Shared data transfer objects for the HTTP API.
//!
//! Request bodies keep the field casing the public API has always used:
//! booking and payment endpoints speak camelCase (`roomId`, `checkIn`), the
//! inventory and admin endpoints speak snake_case. Response bodies are
//! snake_case throughout.

pub mod api;
pub mod auth;
pub mod booking;
pub mod contact;
pub mod discount;
pub mod notification;
pub mod payment;
pub mod resort;
pub mod revenue;
pub mod review;
pub mod room;
pub mod user;
