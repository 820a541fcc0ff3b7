mod auth;
mod booking;
mod payment;
mod revenue;
