pub use super::booking::Entity as Booking;
pub use super::contact::Entity as Contact;
pub use super::discount::Entity as Discount;
pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::resort::Entity as Resort;
pub use super::review::Entity as Review;
pub use super::review_reply::Entity as ReviewReply;
pub use super::room::Entity as Room;
pub use super::room_detail::Entity as RoomDetail;
pub use super::room_type::Entity as RoomType;
pub use super::user::Entity as User;
