//! SQL DDL for the `reminders` table, one flavour per backend.

pub const DROP_TABLE: &str = "DROP TABLE reminders";

pub const DROP_TABLE_IF_EXISTS: &str = "DROP TABLE IF EXISTS reminders";

/// PostgreSQL schema:
/// - `id` SERIAL primary key
/// - `username`, `reminder` free text, nullable
/// - `likes` defaults to 0, `completed` to false
/// - `created_at` TIMESTAMP (no time zone) stamped with `now()`
pub const POSTGRES_CREATE: &str = r#"
CREATE TABLE reminders (
    id SERIAL PRIMARY KEY,
    username TEXT,
    reminder TEXT,
    likes INTEGER NOT NULL DEFAULT 0,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMP NOT NULL DEFAULT now()
)
"#;

/// SQLite schema. AUTOINCREMENT keeps ids from being reused after a delete,
/// matching SERIAL; the `sqlite_sequence` entry goes away with the table.
pub const SQLITE_CREATE: &str = r#"
CREATE TABLE reminders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT,
    reminder TEXT,
    likes INTEGER NOT NULL DEFAULT 0,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;
