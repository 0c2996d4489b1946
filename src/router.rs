use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;

use crate::db::HealthStore;
use crate::handlers;
use crate::service::insight::InsightService;

/// Requests larger than this are rejected with 413 before any handler runs.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Process-wide services, constructed once at startup and injected into
/// every handler through axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: HealthStore,
    pub insight: InsightService,
    cookie_key: Key,
}

impl AppState {
    pub fn new(store: HealthStore, insight: InsightService, cookie_key: Key) -> Self {
        Self {
            store,
            insight,
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/chat", post(handlers::chat::chat))
        .route("/daily_myth", get(handlers::chat::daily_myth))
        .route("/log_symptom", post(handlers::symptoms::log_symptom))
        .route("/get_symptoms", get(handlers::symptoms::get_symptoms))
        .route("/analyze_trends", post(handlers::symptoms::analyze_trends))
        .route("/health_alert", get(handlers::symptoms::health_alert))
        .route("/add_checklist_item", post(handlers::checklist::add_item))
        .route("/checklist", get(handlers::checklist::list_items))
        .route(
            "/update_checklist_item/{item_id}",
            post(handlers::checklist::update_item),
        )
        .route(
            "/delete_checklist_item/{item_id}",
            post(handlers::checklist::delete_item),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
