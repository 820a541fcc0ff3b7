//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let resort = factory::resort::create_resort(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, _resort, _room_type, room, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::booking::BookingFactory;
//!
//! let booking = BookingFactory::new(&db, user.id, room.id)
//!     .status(BookingStatus::Confirmed)
//!     .nightly_rate(Decimal::from(250))
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod discount;
pub mod helpers;
pub mod resort;
pub mod room;
pub mod room_type;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use discount::create_discount;
pub use resort::create_resort;
pub use room::create_room;
pub use room_type::create_room_type;
pub use user::create_user;
