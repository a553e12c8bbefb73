//! The fixed walk through the table: reset, seed, then one of each row operation.

use crate::config::{Client, Config};
use crate::db::{
    NewReminder, PgReminders, Reminder, ReminderStore, ReminderUpdate, SqliteReminders,
    seed_reminders,
};
use crate::error::ReminderError;
use tracing::{debug, error, info};

pub const SELECT_ID: i32 = 2;
pub const UPDATE_ID: i32 = 3;
pub const DELETE_ID: i32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub drop_if_exists: bool,
}

impl From<&Config> for RunOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            drop_if_exists: cfg.drop_if_exists,
        }
    }
}

/// What each step returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub created: Option<Reminder>,
    pub all: Vec<Reminder>,
    pub fetched: Option<Reminder>,
    pub updated: Option<Reminder>,
    pub deleted: Option<Reminder>,
}

pub fn new_reminder() -> NewReminder {
    NewReminder::new("Freddy", "Feed the cat")
}

pub fn replacement() -> ReminderUpdate {
    ReminderUpdate {
        username: Some("Waldo".to_string()),
        reminder: Some("Wash the dishes".to_string()),
        likes: 700,
        completed: true,
    }
}

/// Reset the table, seed it, then run one of each row operation against `store`.
///
/// A failed table creation is logged and the run goes on; any other failure
/// stops the run and is returned. The store is left open.
pub async fn run<S: ReminderStore>(store: &S, opts: RunOptions) -> Result<RunReport, ReminderError> {
    if opts.drop_if_exists {
        store.drop_table_if_exists().await?;
    } else {
        store.drop_table().await?;
    }
    debug!("table dropped");

    match store.create_table().await {
        Ok(()) => info!("table created"),
        Err(e) => error!(error = %e, "there was an error creating the table"),
    }

    let batch = seed_reminders();
    store.insert_many(&batch).await?;
    info!(count = batch.len(), "seeded reminders");

    let created = store.insert_one(&new_reminder()).await?;
    info!(id = created.id, row = ?created, "inserted reminder");

    let all = store.select_all().await?;
    info!(rows = %serde_json::to_string(&all)?, "all reminders");

    let fetched = store.select_by_id(SELECT_ID).await?;
    info!(id = SELECT_ID, row = ?fetched, "a reminder with an id of {}", SELECT_ID);

    let update = replacement();
    debug!(id = UPDATE_ID, ?update, "updating reminder");
    let updated = store.update_by_id(UPDATE_ID, &update).await?;
    info!(id = UPDATE_ID, row = ?updated, "updated reminder with id of {}", UPDATE_ID);

    let deleted = store.delete_by_id(DELETE_ID).await?;
    info!(id = DELETE_ID, row = ?deleted, "this reminder was deleted");

    Ok(RunReport {
        created: Some(created),
        all,
        fetched,
        updated,
        deleted,
    })
}

/// Run `store` through the sequence, then close it whether or not the run succeeded.
pub async fn run_and_close<S: ReminderStore>(
    store: S,
    opts: RunOptions,
) -> Result<RunReport, ReminderError> {
    let outcome = run(&store, opts).await;
    store.close().await;
    info!("the connection is closed");
    outcome
}

/// Open the store named by `cfg.client` and run it to completion.
pub async fn run_with_config(cfg: &Config) -> Result<RunReport, ReminderError> {
    let url = cfg
        .connection
        .as_deref()
        .ok_or_else(|| ReminderError::MissingConnection {
            profile: cfg.profile.clone(),
        })?;
    let opts = RunOptions::from(cfg);

    match cfg.client {
        Client::Pg => run_and_close(PgReminders::connect(url).await?, opts).await,
        Client::Sqlite => run_and_close(SqliteReminders::connect(url).await?, opts).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let cfg = Config {
            drop_if_exists: true,
            ..Config::default()
        };
        assert!(RunOptions::from(&cfg).drop_if_exists);
        assert!(!RunOptions::default().drop_if_exists);
    }
}
