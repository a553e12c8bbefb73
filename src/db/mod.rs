//! Database module: the reminder model, schema and the two storage backends.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and insert/update payloads
//! - `schema.rs`: SQL DDL for dropping and creating the table
//! - `postgres.rs`, `sqlite.rs`: [`ReminderStore`] over a single-connection sqlx pool

pub mod models;
pub mod postgres;
pub mod schema;
pub mod sqlite;

pub use models::{NewReminder, Reminder, ReminderUpdate, seed_reminders};
pub use postgres::{PgPool, PgReminders};
pub use sqlite::{SqlitePool, SqliteReminders};

use crate::error::ReminderError;

/// Schema and row operations on the `reminders` table.
///
/// Lookups by id return `Ok(None)` when no row matches; `Err` is reserved for
/// failures reported by the database or the driver.
#[allow(async_fn_in_trait)]
pub trait ReminderStore {
    /// `DROP TABLE reminders`; fails when the table is missing.
    async fn drop_table(&self) -> Result<(), ReminderError>;

    async fn drop_table_if_exists(&self) -> Result<(), ReminderError>;

    async fn create_table(&self) -> Result<(), ReminderError>;

    /// Insert all rows in one statement. An empty batch does nothing.
    async fn insert_many(&self, items: &[NewReminder]) -> Result<(), ReminderError>;

    /// Insert one row and return it as stored, defaults included.
    async fn insert_one(&self, item: &NewReminder) -> Result<Reminder, ReminderError>;

    /// Every row, in whatever order the database yields them.
    async fn select_all(&self) -> Result<Vec<Reminder>, ReminderError>;

    async fn select_by_id(&self, id: i32) -> Result<Option<Reminder>, ReminderError>;

    /// Overwrite username, reminder, likes and completed. Returns the row after the write.
    async fn update_by_id(
        &self,
        id: i32,
        update: &ReminderUpdate,
    ) -> Result<Option<Reminder>, ReminderError>;

    /// Delete one row and return what it held.
    async fn delete_by_id(&self, id: i32) -> Result<Option<Reminder>, ReminderError>;

    /// Release the underlying connection. The store must not be used afterwards.
    async fn close(&self);
}
