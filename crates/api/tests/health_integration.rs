//! Integration tests for health endpoints.

mod common;

use axum::http::StatusCode;
use common::{create_test_app, get_request, parse_response_body, run_migrations, test_config, try_create_test_pool};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let Some(pool) = try_create_test_pool().await else {
        eprintln!("Skipping: TEST_DATABASE_URL is not set");
        return;
    };
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body.get("timestamp").is_some());
    assert_eq!(body["database"]["connected"], true);
}

#[tokio::test]
async fn test_liveness_probe() {
    let Some(pool) = try_create_test_pool().await else {
        eprintln!("Skipping: TEST_DATABASE_URL is not set");
        return;
    };
    let app = create_test_app(test_config(), pool.clone());

    let response = app.oneshot(get_request("/api/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_probe() {
    let Some(pool) = try_create_test_pool().await else {
        eprintln!("Skipping: TEST_DATABASE_URL is not set");
        return;
    };
    let app = create_test_app(test_config(), pool.clone());

    let response = app.oneshot(get_request("/api/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "ready");
}
