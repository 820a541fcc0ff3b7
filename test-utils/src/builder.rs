use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Resort, Room};
///
/// let test = TestBuilder::new()
///     .with_table(Resort)
///     .with_table(Room)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for room inventory operations.
    ///
    /// Adds the following tables in dependency order:
    /// - User
    /// - Resort
    /// - RoomType
    /// - Room
    /// - RoomDetail
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_room_tables(self) -> Self {
        self.with_table(User)
            .with_table(Resort)
            .with_table(RoomType)
            .with_table(Room)
            .with_table(RoomDetail)
    }

    /// Adds all tables required for booking operations.
    ///
    /// Equivalent to `with_room_tables()` followed by the Booking table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_booking_tables(self) -> Self {
        self.with_room_tables().with_table(Booking)
    }

    /// Adds all tables required for payment operations.
    ///
    /// Equivalent to `with_booking_tables()` followed by the Discount and
    /// Payment tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_payment_tables(self) -> Self {
        self.with_booking_tables()
            .with_table(Discount)
            .with_table(Payment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
