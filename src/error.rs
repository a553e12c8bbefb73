use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ReminderError {
    #[error("No connection string configured for profile `{profile}`; set DATABASE_URL")]
    MissingConnection { profile: String },

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReminderError {
    /// True when the database rejected a statement that referenced a missing table.
    pub fn is_undefined_table(&self) -> bool {
        match self {
            // 42P01 is Postgres' undefined_table; SQLite only reports it in the message.
            ReminderError::Database(SqlxError::Database(db)) => {
                db.code().as_deref() == Some("42P01") || db.message().contains("no such table")
            }
            _ => false,
        }
    }
}
