//! SQL DDL for initializing the health-tracking tables.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `users.email` UNIQUE backs the duplicate-registration check
/// - `symptom_logs.log_date` stored as an ISO calendar date (TEXT)
/// - `checklist_items.created_at` stored as RFC3339 (TEXT), server-assigned
/// - `is_completed` BOOLEAN (stored as INTEGER 0/1)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS symptom_logs (
    log_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id),
    symptom_name TEXT NOT NULL,
    log_date TEXT NOT NULL,
    severity TEXT NULL,
    notes TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_symptom_logs_user_id ON symptom_logs(user_id);

CREATE TABLE IF NOT EXISTS checklist_items (
    item_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id),
    content TEXT NOT NULL,
    is_completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_checklist_items_user_id ON checklist_items(user_id);
"#;
