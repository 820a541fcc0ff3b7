//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// username/code/name to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates the room inventory a booking depends on.
///
/// This is a convenience method that creates:
/// 1. User (as booking owner)
/// 2. Resort
/// 3. Room type
/// 4. Room
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, resort, room_type, room))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::resort::Model,
        entity::room_type::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let resort = crate::factory::resort::create_resort(db).await?;
    let room_type = crate::factory::room_type::create_room_type(db).await?;
    let room = crate::factory::room::create_room(db, resort.id, room_type.id).await?;

    Ok((user, resort, room_type, room))
}

/// Creates a booking together with all of its dependencies.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, resort, room_type, room, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::resort::Model,
        entity::room_type::Model,
        entity::room::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (user, resort, room_type, room) = create_booking_dependencies(db).await?;
    let booking = crate::factory::booking::create_booking(db, user.id, room.id).await?;

    Ok((user, resort, room_type, room, booking))
}
