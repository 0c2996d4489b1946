use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub age: i64,
    #[serde(default)]
    pub gender: Option<String>,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LogSymptomRequest {
    pub symptom: String,
    pub log_date: NaiveDate,
    pub severity: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Calendar window sent by the client. Accepted but not applied as a
/// filter; see DESIGN.md.
#[derive(Debug, Deserialize)]
pub struct SymptomWindowQuery {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct AddChecklistItemRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateChecklistItemRequest {
    #[serde(default)]
    pub is_completed: bool,
}
