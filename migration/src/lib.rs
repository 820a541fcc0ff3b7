pub use sea_orm_migration::prelude::*;

mod m20250915_000001_create_user_table;
mod m20250915_000002_create_resort_table;
mod m20250915_000003_create_room_type_table;
mod m20250915_000004_create_room_table;
mod m20250915_000005_create_room_detail_table;
mod m20250915_000006_create_discount_table;
mod m20250915_000007_create_booking_table;
mod m20250915_000008_create_payment_table;
mod m20250916_000009_create_review_table;
mod m20250916_000010_create_review_reply_table;
mod m20250916_000011_create_notification_table;
mod m20250916_000012_create_contact_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250915_000001_create_user_table::Migration),
            Box::new(m20250915_000002_create_resort_table::Migration),
            Box::new(m20250915_000003_create_room_type_table::Migration),
            Box::new(m20250915_000004_create_room_table::Migration),
            Box::new(m20250915_000005_create_room_detail_table::Migration),
            Box::new(m20250915_000006_create_discount_table::Migration),
            Box::new(m20250915_000007_create_booking_table::Migration),
            Box::new(m20250915_000008_create_payment_table::Migration),
            Box::new(m20250916_000009_create_review_table::Migration),
            Box::new(m20250916_000010_create_review_reply_table::Migration),
            Box::new(m20250916_000011_create_notification_table::Migration),
            Box::new(m20250916_000012_create_contact_table::Migration),
        ]
    }
}
