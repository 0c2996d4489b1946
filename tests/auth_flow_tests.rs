mod common;

use axum::http::{StatusCode, header};
use common::*;
use serde_json::json;

#[tokio::test]
async fn register_then_duplicate_email_conflicts() {
    let app = spawn_app("register-dup").await;

    let resp = register(&app.router, "Ann", "a@x.com", "pw1").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "User registered successfully!");

    let resp = register(&app.router, "Another Ann", "a@x.com", "pw2").await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "An account with this email already exists.");

    // the first account is untouched
    let user = app
        .store
        .find_user_by_email("a@x.com")
        .await
        .unwrap()
        .expect("registered user should exist");
    assert_eq!(user.name, "Ann");
}

#[tokio::test]
async fn register_rejects_missing_required_fields() {
    let app = spawn_app("register-empty").await;

    let resp = send_json(
        &app.router,
        "POST",
        "/register",
        Some(json!({
            "name": "",
            "email": "a@x.com",
            "age": 30,
            "gender": "F",
            "password": "pw1",
        })),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_failures_are_byte_identical() {
    let app = spawn_app("login-uniform").await;
    register(&app.router, "Ann", "a@x.com", "pw1").await;

    let wrong_password = login(&app.router, "a@x.com", "wrong").await;
    let unknown_email = login(&app.router, "ghost@x.com", "wrong").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_bytes(wrong_password).await,
        body_bytes(unknown_email).await
    );
}

#[tokio::test]
async fn login_establishes_a_working_session() {
    let app = spawn_app("login-session").await;

    let cookie = register_and_login(&app.router, "a@x.com").await;
    assert!(cookie.starts_with("cognicare_session="));

    let resp = send_json(&app.router, "GET", "/checklist", None, Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn protected_routes_reject_anonymous_callers() {
    let app = spawn_app("anon-reject").await;

    let attempts = [
        ("POST", "/chat", Some(json!({"message": "hi"}))),
        ("GET", "/daily_myth", None),
        ("POST", "/log_symptom", None),
        ("GET", "/get_symptoms", None),
        ("POST", "/analyze_trends", None),
        ("GET", "/health_alert", None),
        ("POST", "/add_checklist_item", Some(json!({"content": "x"}))),
        ("GET", "/checklist", None),
        (
            "POST",
            "/update_checklist_item/1",
            Some(json!({"is_completed": true})),
        ),
        ("POST", "/delete_checklist_item/1", None),
    ];
    for (method, path, body) in attempts {
        let resp = send_json(&app.router, method, path, body, None).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{method} {path}");
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Authentication required.");
    }

    // the denied add above never reached the store
    let cookie = register_and_login(&app.router, "a@x.com").await;
    let resp = send_json(&app.router, "GET", "/checklist", None, Some(&cookie)).await;
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn a_forged_session_cookie_is_rejected() {
    let app = spawn_app("forged-cookie").await;
    register_and_login(&app.router, "a@x.com").await;

    // a plaintext user id is not a valid private cookie
    let resp = send_json(
        &app.router,
        "GET",
        "/checklist",
        None,
        Some("cognicare_session=1"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_the_session_and_is_idempotent() {
    let app = spawn_app("logout").await;
    let cookie = register_and_login(&app.router, "a@x.com").await;

    let resp = send_json(&app.router, "POST", "/logout", None, Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let removal = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout should rewrite the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(removal.starts_with("cognicare_session="));
    let cleared_value = removal.split(';').next().unwrap();
    assert_eq!(cleared_value, "cognicare_session=");

    // logging out with no session at all still succeeds
    let resp = send_json(&app.router, "POST", "/logout", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
