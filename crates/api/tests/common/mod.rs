//! Shared test harness: router construction and request helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gearbase_api::auth::jwt::{generate_access_token, JwtConfig};
use gearbase_api::auth::password::hash_password;
use gearbase_api::config::ServerConfig;
use gearbase_api::router::build_app_router;
use gearbase_api::state::AppState;
use gearbase_core::types::DbId;
use gearbase_db::models::user::User;
use gearbase_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Uses [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// User seeding and tokens
// ---------------------------------------------------------------------------

/// Role ids as seeded by the roles migration.
pub const ROLE_ADMIN_ID: DbId = 1;
pub const ROLE_MANAGER_ID: DbId = 2;
pub const ROLE_STAFF_ID: DbId = 3;

/// Password used for every seeded test user.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Create a test user directly in the database.
pub async fn seed_user(pool: &PgPool, username: &str, role_id: DbId) -> User {
    seed_user_exclusive(pool, username, role_id, false).await
}

/// Create a test user, optionally flagged for exclusive usage.
pub async fn seed_user_exclusive(
    pool: &PgPool,
    username: &str,
    role_id: DbId,
    exclusive_usage: bool,
) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::insert(
        pool,
        username,
        &format!("{username}@test.com"),
        &hashed,
        role_id,
        exclusive_usage,
    )
    .await
    .expect("user creation should succeed")
}

/// Generate a valid access token for a seeded user, bypassing the login
/// endpoint. The role name must match the user's `role_id`.
pub fn token_for(user: &User, role: &str) -> String {
    generate_access_token(user.id, role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Seed a manager and return an access token for them. Most write-path tests
/// only need this.
pub async fn manager_token(pool: &PgPool) -> String {
    let user = seed_user(pool, "test_manager", ROLE_MANAGER_ID).await;
    token_for(&user, "manager")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Assert the response has the expected status; on mismatch, include the
/// body in the panic message for easier debugging.
pub async fn assert_status(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&bytes).to_string();
    assert_eq!(status, expected, "unexpected status, body: {text}");
    if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be valid JSON")
    }
}
