use crate::db::ReminderStore;
use crate::db::models::{NewReminder, Reminder, ReminderUpdate};
use crate::db::schema::{DROP_TABLE, DROP_TABLE_IF_EXISTS, SQLITE_CREATE};
use crate::error::ReminderError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, QueryBuilder, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

const INSERT_MANY_HEAD: &str = "INSERT INTO reminders (username, reminder) ";

const INSERT_ONE_QUERY: &str =
    "INSERT INTO reminders (username, reminder) VALUES (?, ?) RETURNING *";

const SELECT_ALL_QUERY: &str = "SELECT * FROM reminders";

const SELECT_ONE_QUERY: &str = "SELECT * FROM reminders WHERE id = ?";

const UPDATE_QUERY: &str = r#"UPDATE reminders SET
    username = ?,
    reminder = ?,
    completed = ?,
    likes = ?
  WHERE id = ?
  RETURNING *"#;

const DELETE_QUERY: &str = "DELETE FROM reminders WHERE id = ? RETURNING *";

#[derive(Clone)]
pub struct SqliteReminders {
    pool: SqlitePool,
}

impl SqliteReminders {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool holding a single connection, creating the database file if needed.
    ///
    /// The connection is never recycled, so `sqlite::memory:` keeps its data for
    /// the lifetime of the store.
    pub async fn connect(url: &str) -> Result<Self, ReminderError> {
        let connect_opts = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_opts)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl ReminderStore for SqliteReminders {
    async fn drop_table(&self) -> Result<(), ReminderError> {
        sqlx::query(DROP_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn drop_table_if_exists(&self) -> Result<(), ReminderError> {
        sqlx::query(DROP_TABLE_IF_EXISTS).execute(&self.pool).await?;
        Ok(())
    }

    async fn create_table(&self) -> Result<(), ReminderError> {
        sqlx::query(SQLITE_CREATE).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_many(&self, items: &[NewReminder]) -> Result<(), ReminderError> {
        if items.is_empty() {
            return Ok(());
        }
        let mut builder = QueryBuilder::<Sqlite>::new(INSERT_MANY_HEAD);
        builder.push_values(items, |mut row, item| {
            row.push_bind(item.username.as_deref())
                .push_bind(item.reminder.as_deref());
        });
        builder.build().execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_one(&self, item: &NewReminder) -> Result<Reminder, ReminderError> {
        let row = sqlx::query_as::<_, Reminder>(INSERT_ONE_QUERY)
            .bind(item.username.as_deref())
            .bind(item.reminder.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn select_all(&self) -> Result<Vec<Reminder>, ReminderError> {
        let rows = sqlx::query_as::<_, Reminder>(SELECT_ALL_QUERY)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<Reminder>, ReminderError> {
        let row = sqlx::query_as::<_, Reminder>(SELECT_ONE_QUERY)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_by_id(
        &self,
        id: i32,
        update: &ReminderUpdate,
    ) -> Result<Option<Reminder>, ReminderError> {
        let row = sqlx::query_as::<_, Reminder>(UPDATE_QUERY)
            .bind(update.username.as_deref())
            .bind(update.reminder.as_deref())
            .bind(update.completed)
            .bind(update.likes)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<Reminder>, ReminderError> {
        let row = sqlx::query_as::<_, Reminder>(DELETE_QUERY)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
