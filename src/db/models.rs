use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `reminders` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Reminder {
    pub id: i32,
    pub username: Option<String>,
    pub reminder: Option<String>,
    pub likes: i32,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

/// Insert payload; `likes`, `completed` and `created_at` take their column defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReminder {
    pub username: Option<String>,
    pub reminder: Option<String>,
}

impl NewReminder {
    pub fn new(username: impl Into<String>, reminder: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            reminder: Some(reminder.into()),
        }
    }
}

/// Full replacement of the mutable columns. Every field is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReminderUpdate {
    pub username: Option<String>,
    pub reminder: Option<String>,
    pub likes: i32,
    pub completed: bool,
}

/// The batch inserted by the seeding step.
pub fn seed_reminders() -> Vec<NewReminder> {
    vec![
        NewReminder::new("Dustin", "Dust the furniture"),
        NewReminder::new("Velma", "Vacuum the floors"),
        NewReminder::new("Waldo", "Wash the dishes"),
    ]
}
