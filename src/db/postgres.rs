use crate::db::ReminderStore;
use crate::db::models::{NewReminder, Reminder, ReminderUpdate};
use crate::db::schema::{DROP_TABLE, DROP_TABLE_IF_EXISTS, POSTGRES_CREATE};
use crate::error::ReminderError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres, QueryBuilder};

pub type PgPool = Pool<Postgres>;

const INSERT_MANY_HEAD: &str = "INSERT INTO reminders (username, reminder) ";

const INSERT_ONE_QUERY: &str =
    "INSERT INTO reminders (username, reminder) VALUES ($1, $2) RETURNING *";

const SELECT_ALL_QUERY: &str = "SELECT * FROM reminders";

const SELECT_ONE_QUERY: &str = "SELECT * FROM reminders WHERE id = $1";

const UPDATE_QUERY: &str = r#"UPDATE reminders SET
    username = $1,
    reminder = $2,
    completed = $3,
    likes = $4
  WHERE id = $5
  RETURNING *"#;

const DELETE_QUERY: &str = "DELETE FROM reminders WHERE id = $1 RETURNING *";

#[derive(Clone)]
pub struct PgReminders {
    pool: PgPool,
}

impl PgReminders {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool holding a single connection.
    pub async fn connect(url: &str) -> Result<Self, ReminderError> {
        let pool = PgPoolOptions::new().max_connections(1).connect(url).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl ReminderStore for PgReminders {
    async fn drop_table(&self) -> Result<(), ReminderError> {
        sqlx::query(DROP_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn drop_table_if_exists(&self) -> Result<(), ReminderError> {
        sqlx::query(DROP_TABLE_IF_EXISTS).execute(&self.pool).await?;
        Ok(())
    }

    async fn create_table(&self) -> Result<(), ReminderError> {
        sqlx::query(POSTGRES_CREATE).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_many(&self, items: &[NewReminder]) -> Result<(), ReminderError> {
        if items.is_empty() {
            return Ok(());
        }
        let mut builder = QueryBuilder::<Postgres>::new(INSERT_MANY_HEAD);
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
