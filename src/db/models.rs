use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered account. `password_hash` is an opaque PHC digest and is
/// never serialized into responses.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Option<String>,
    pub email: String,
    pub password_hash: String,
}

/// Fields required to insert a new account row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
    pub gender: Option<String>,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomLog {
    pub log_id: i64,
    pub user_id: i64,
    pub symptom_name: String,
    pub log_date: NaiveDate,
    pub severity: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSymptomLog {
    pub symptom_name: String,
    pub log_date: NaiveDate,
    pub severity: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistItem {
    pub item_id: i64,
    pub user_id: i64,
    pub content: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}
