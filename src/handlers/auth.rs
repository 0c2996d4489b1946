use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde_json::json;
use tracing::info;

use crate::db::models::NewUser;
use crate::error::AppError;
use crate::middleware::auth::{clear_session_cookie, session_cookie};
use crate::router::AppState;
use crate::service::password;
use crate::types::requests::{LoginRequest, RegisterRequest};

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Name, email and password are required.",
        ));
    }

    // Reject duplicates before paying for the hash.
    if state.store.find_user_by_email(&req.email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = password::hash_password(&req.password)?;
    let user_id = state
        .store
        .create_user(NewUser {
            name: req.name,
            age: req.age,
            gender: req.gender,
            email: req.email,
            password_hash,
        })
        .await?;

    info!(user_id, "registered new account");
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "User registered successfully!"})),
    ))
}

/// POST /login
///
/// Unknown email and wrong password both land on `InvalidCredentials`, so
/// the responses cannot be told apart.
pub async fn login(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user) = state.store.find_user_by_email(&req.email).await? else {
        return Err(AppError::InvalidCredentials);
    };
    if !password::verify_password(&req.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    info!(user_id = user.id, "session established");
    let jar = jar.add(session_cookie(user.id));
    Ok((jar, Json(json!({"message": "Login successful!"}))))
}

/// POST /logout — idempotent; clearing an absent session is still a success.
pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    let jar = jar.remove(clear_session_cookie());
    (jar, Json(json!({"message": "Logged out."})))
}
