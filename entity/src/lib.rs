pub mod prelude;

pub mod booking;
pub mod contact;
pub mod discount;
pub mod notification;
pub mod payment;
pub mod resort;
pub mod review;
pub mod review_reply;
pub mod room;
pub mod room_detail;
pub mod room_type;
pub mod user;
