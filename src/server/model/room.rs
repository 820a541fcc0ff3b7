use entity::room::RoomStatus;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Parameters for inserting or updating the rooms row itself.
#[derive(Debug, Clone)]
pub struct RoomParams {
    pub resort_id: i32,
    pub room_type_id: Uuid,
    pub location: String,
    pub address: String,
    pub status: RoomStatus,
    pub category: String,
}

/// Parameters for the 1:1 room_details row managed alongside the room.
#[derive(Debug, Clone)]
pub struct RoomDetailParams {
    pub description: String,
    pub num_bed: String,
    pub price_per_night: Option<Decimal>,
}

/// Optional filters for the public room listing.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub resort_id: Option<i32>,
    /// Case-insensitive substring match on the location.
    pub location: Option<String>,
    /// Exact room type name.
    pub room_type: Option<String>,
}
