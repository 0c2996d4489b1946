use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("authentication required")]
    Unauthorized,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("item not found")]
    ItemNotFound,

    #[error("an account with this email already exists")]
    DuplicateEmail,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model returned an empty generation")]
    EmptyGeneration,

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Authentication required.".to_string(),
            ),
            // Unknown email and wrong password share one body on purpose.
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password.".to_string(),
            ),
            // Owner mismatches take this arm too, so other users' rows stay
            // indistinguishable from absent ones.
            AppError::ItemNotFound => (StatusCode::NOT_FOUND, "Item not found.".to_string()),
            AppError::DuplicateEmail => (
                StatusCode::CONFLICT,
                "An account with this email already exists.".to_string(),
            ),
            AppError::Database(_) | AppError::PasswordHash(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred.".to_string(),
            ),
            AppError::Reqwest(_)
            | AppError::UrlParse(_)
            | AppError::Json(_)
            | AppError::EmptyGeneration => (
                StatusCode::BAD_GATEWAY,
                "Upstream service is unavailable.".to_string(),
            ),
        };
        (status, Json(ApiMessage { message })).into_response()
    }
}

/// Standardized API message body.
#[derive(Serialize)]
pub struct ApiMessage {
    pub message: String,
}
