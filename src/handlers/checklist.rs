use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::middleware::auth::CurrentUser;
use crate::router::AppState;
use crate::types::requests::{AddChecklistItemRequest, UpdateChecklistItemRequest};
use crate::types::responses::ChecklistItemDto;

/// POST /add_checklist_item
pub async fn add_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<AddChecklistItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let Some(content) = req.content.filter(|c| !c.is_empty()) else {
        return Err(AppError::Validation("Content cannot be empty."));
    };

    let item = state.store.insert_checklist_item(user.id, &content).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Item added!",
            "item": ChecklistItemDto::from(item),
        })),
    ))
}

/// GET /checklist — the owner's items, oldest first.
pub async fn list_items(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ChecklistItemDto>>, AppError> {
    let items = state
        .store
        .list_checklist_items(user.id)
        .await?
        .into_iter()
        .map(ChecklistItemDto::from)
        .collect();
    Ok(Json(items))
}

/// POST /update_checklist_item/{item_id}
///
/// Owner-scoped: a row belonging to someone else reads as missing.
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<i64>,
    Json(req): Json<UpdateChecklistItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let touched = state
        .store
        .set_checklist_completed(item_id, user.id, req.is_completed)
        .await?;
    if touched == 0 {
        return Err(AppError::ItemNotFound);
    }
    Ok(Json(json!({"message": "Item updated!"})))
}

/// POST /delete_checklist_item/{item_id}
pub async fn delete_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.store.delete_checklist_item(item_id, user.id).await?;
    if removed == 0 {
        return Err(AppError::ItemNotFound);
    }
    Ok(Json(json!({"message": "Item deleted!"})))
}
