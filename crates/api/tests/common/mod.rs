//! Common test utilities for integration tests.
//!
//! Integration tests run against a real PostgreSQL database. Set the
//! TEST_DATABASE_URL environment variable to point at a scratch database;
//! tests skip themselves when it is not set.

// Helper utilities intentionally available to all integration tests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::Router;
use phone_tracker_api::{app::create_app, config::Config};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Create a test database pool, or None when TEST_DATABASE_URL is unset.
pub async fn try_create_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    Some(pool)
}

/// Run migrations on the test database.
pub async fn run_migrations(pool: &PgPool) {
    sqlx::migrate!("../persistence/src/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");
}

/// Test configuration; the pool is created separately so the database URL
/// here is only informational.
pub fn test_config() -> Config {
    Config {
        server: phone_tracker_api::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        database: phone_tracker_api::config::DatabaseConfig {
            url: std::env::var("TEST_DATABASE_URL").unwrap_or_default(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        },
        logging: phone_tracker_api::config::LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: phone_tracker_api::config::SecurityConfig {
            cors_origins: vec![],
        },
    }
}

/// Create a test application router.
pub fn create_test_app(config: Config, pool: PgPool) -> Router {
    create_app(config, pool)
}

/// Generate a device identifier unique to one test run.
pub fn unique_device_id() -> String {
    format!("test-device-{}", uuid::Uuid::new_v4())
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Parse a response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Response body is not valid JSON")
}

/// Register a phone and return the response body.
pub async fn register_phone(
    app: &Router,
    device_id: &str,
    device_name: &str,
    phone_number: Option<&str>,
) -> serde_json::Value {
    use tower::ServiceExt;

    let request = json_request(
        Method::POST,
        "/api/v1/phones/register",
        serde_json::json!({
            "deviceId": device_id,
            "deviceName": device_name,
            "phoneNumber": phone_number,
        }),
    );
    let response = app.clone().oneshot(request).await.expect("Request failed");
    assert_eq!(
        response.status(),
        axum::http::StatusCode::OK,
        "registration should succeed"
    );
    parse_response_body(response).await
}

/// Push a location update and return the raw response.
pub async fn push_location(
    app: &Router,
    body: serde_json::Value,
) -> axum::response::Response {
    use tower::ServiceExt;

    let request = json_request(Method::POST, "/api/v1/locations", body);
    app.clone().oneshot(request).await.expect("Request failed")
}
