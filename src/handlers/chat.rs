use axum::{Json, extract::State};

use crate::middleware::auth::CurrentUser;
use crate::router::AppState;
use crate::service::insight::MythFact;
use crate::types::requests::ChatRequest;
use crate::types::responses::ChatResponse;

/// POST /chat — personalized reply from the external model. Gateway
/// failures surface as fallback text, never as an error status.
pub async fn chat(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = state.insight.chat_reply(&user, &req.message).await;
    Json(ChatResponse { reply })
}

/// GET /daily_myth — one myth/fact pair for the dashboard.
pub async fn daily_myth(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Json<MythFact> {
    Json(state.insight.daily_myth().await)
}
