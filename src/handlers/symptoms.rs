use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::db::models::{NewSymptomLog, SymptomLog};
use crate::error::AppError;
use crate::middleware::auth::CurrentUser;
use crate::router::AppState;
use crate::service::alerts::{HealthAlert, current_alert};
use crate::types::requests::{LogSymptomRequest, SymptomWindowQuery};
use crate::types::responses::{AnalysisResponse, CalendarEvent, CalendarEventProps};

/// POST /log_symptom
pub async fn log_symptom(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<LogSymptomRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .store
        .insert_symptom(
            user.id,
            NewSymptomLog {
                symptom_name: req.symptom,
                log_date: req.log_date,
                severity: Some(req.severity),
                notes: req.notes,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Symptom logged successfully!"})),
    ))
}

/// GET /get_symptoms?year=&month=
///
/// The window parameters are accepted but not applied; the calendar always
/// receives every record of the owner.
pub async fn get_symptoms(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(_window): Query<SymptomWindowQuery>,
) -> Result<Json<Vec<CalendarEvent>>, AppError> {
    let events = state
        .store
        .list_symptoms_by_owner(user.id)
        .await?
        .into_iter()
        .map(to_calendar_event)
        .collect();
    Ok(Json(events))
}

/// POST /analyze_trends
pub async fn analyze_trends(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<AnalysisResponse>, AppError> {
    let logs = state.store.list_symptoms_by_owner(user.id).await?;
    let analysis = state.insight.analyze_trends(&user, &logs).await;
    Ok(Json(AnalysisResponse { analysis }))
}

/// GET /health_alert
pub async fn health_alert(CurrentUser(_user): CurrentUser) -> Json<HealthAlert> {
    Json(current_alert())
}

fn to_calendar_event(log: SymptomLog) -> CalendarEvent {
    CalendarEvent {
        title: log.symptom_name,
        start: log.log_date.to_string(),
        color: severity_color(log.severity.as_deref()).to_string(),
        extended_props: CalendarEventProps {
            notes: log.notes,
            severity: log.severity,
        },
    }
}

/// Display derivation only; recomputed on every read, never stored.
fn severity_color(severity: Option<&str>) -> &'static str {
    match severity {
        Some("Mild") => "#7ED321",
        Some("Severe") => "#D0021B",
        _ => "#F5A623",
    }
}
