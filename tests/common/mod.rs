#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;
use url::Url;

use cognicare::config::Config;
use cognicare::db::HealthStore;
use cognicare::router::{AppState, app_router};
use cognicare::service::insight::InsightService;

pub struct TestApp {
    pub router: Router,
    pub store: HealthStore,
}

/// Build the real router over a throwaway SQLite file. The gateway base URL
/// points at an unroutable loopback port, so every AI call fails fast and
/// exercises the fallback paths.
pub async fn spawn_app(tag: &str) -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "cognicare-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let store = cognicare::db::spawn(&database_url).await;

    let mut cfg = Config::default();
    cfg.gemini_base_url = Url::parse("http://127.0.0.1:9/v1beta").expect("test base url");

    let insight = InsightService::new(&cfg);
    let state = AppState::new(store.clone(), insight, cfg.cookie_key());

    TestApp {
        router: app_router(state),
        store,
    }
}

pub async fn send_json(
    router: &Router,
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed")
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

pub async fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(resp).await).expect("response body was not JSON")
}

/// The `name=value` pair of the response's set-cookie header.
pub fn session_cookie(resp: &Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .expect("missing set-cookie header")
        .to_str()
        .expect("set-cookie was not utf-8")
        .split(';')
        .next()
        .expect("empty set-cookie header")
        .to_string()
}

pub async fn register(router: &Router, name: &str, email: &str, password: &str) -> Response {
    send_json(
        router,
        "POST",
        "/register",
        Some(json!({
            "name": name,
            "email": email,
            "age": 30,
            "gender": "F",
            "password": password,
        })),
        None,
    )
    .await
}

pub async fn login(router: &Router, email: &str, password: &str) -> Response {
    send_json(
        router,
        "POST",
        "/login",
        Some(json!({"email": email, "password": password})),
        None,
    )
    .await
}

/// Register a fresh account and return its session cookie.
pub async fn register_and_login(router: &Router, email: &str) -> String {
    let resp = register(router, "Ann", email, "pw1").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let resp = login(router, email, "pw1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    session_cookie(&resp)
}
