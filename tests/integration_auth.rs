//! Database-backed registration and login flows.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_then_login_round_trip(pool: PgPool) {
    let app = common::setup_test_app(pool.clone());

    let (status, body) = post_json(
        app.clone(),
        "/api/auth/register",
        json!({ "username": "ali1", "password": "pw123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, body) = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "ali1", "password": "pw123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], json!("ali1"));
    assert_eq!(body["role"], json!("student"));
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_registration_conflicts_and_stores_one_row(pool: PgPool) {
    let app = common::setup_test_app(pool.clone());
    let payload = json!({ "username": "ali1", "password": "pw123" });

    let (status, _) = post_json(app.clone(), "/api/auth/register", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(app, "/api/auth/register", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!("Username already exists"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = 'ali1'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_with_wrong_password_is_unauthorized(pool: PgPool) {
    let app = common::setup_test_app(pool.clone());

    let (status, _) = post_json(
        app.clone(),
        "/api/auth/register",
        json!({ "username": "ali1", "password": "pw123" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "ali1", "password": "wrong" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Invalid credentials"));
}
