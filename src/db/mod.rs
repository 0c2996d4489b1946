//! Database module: models, schema, and the user-scoped store.
//!
//! Layout:
//! - `models.rs`: plain row structs, separate from request/response DTOs
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: `HealthStore`, the owner-scoped CRUD surface

pub mod models;
pub mod schema;
pub mod store;

pub use models::{ChecklistItem, NewSymptomLog, NewUser, SymptomLog, User};
pub use schema::SQLITE_INIT;
pub use store::{HealthStore, SqlitePool};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Open (creating if missing) the database at `database_url` and run the
/// schema. Startup-only; failures here abort the process.
pub async fn spawn(database_url: &str) -> HealthStore {
    let opts = SqliteConnectOptions::from_str(database_url)
        .expect("FATAL: invalid DATABASE_URL")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(opts)
        .await
        .expect("FATAL: failed to open the database");
    let store = HealthStore::new(pool);
    store
        .init_schema()
        .await
        .expect("FATAL: failed to initialize the database schema");
    store
}
