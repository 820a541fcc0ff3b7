mod booking;
mod discount;
mod payment;
mod resort;
mod room;
mod user;
