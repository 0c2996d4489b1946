pub mod auth;
pub mod chat;
pub mod checklist;
pub mod symptoms;
