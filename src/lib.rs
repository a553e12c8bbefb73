pub mod config;
pub mod db;
pub mod error;
pub mod runner;

pub use config::{Client, Config};
pub use db::{NewReminder, Reminder, ReminderStore, ReminderUpdate};
pub use error::ReminderError;
pub use runner::{RunOptions, RunReport, run, run_with_config};
