//! HTTP-level integration tests for authentication: login, token refresh,
//! logout, and account lockout.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get, post_json, post_json_auth, seed_user, ROLE_ADMIN_ID, ROLE_STAFF_ID,
    TEST_PASSWORD,
};
use sqlx::PgPool;

/// Log in a user via the API and return the JSON response containing
/// `accessToken`, `refreshToken`, and `user` info.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Auth flow tests
// ---------------------------------------------------------------------------

/// Successful login returns 200 with tokens and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_success(pool: PgPool) {
    let user = seed_user(&pool, "loginuser", ROLE_ADMIN_ID).await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "loginuser", TEST_PASSWORD).await;

    assert!(json["accessToken"].is_string(), "response must contain accessToken");
    assert!(json["refreshToken"].is_string(), "response must contain refreshToken");
    assert!(json["expiresIn"].is_number(), "response must contain expiresIn");
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@test.com");
    assert_eq!(json["user"]["role"], "admin");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password(pool: PgPool) {
    seed_user(&pool, "wrongpw", ROLE_ADMIN_ID).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_inactive_user(pool: PgPool) {
    let user = seed_user(&pool, "inactive", ROLE_ADMIN_ID).await;
    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "inactive", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A valid refresh token returns new tokens; the old refresh token rotates.
#[sqlx::test(migrations = "../db/migrations")]
async fn token_refresh_rotates(pool: PgPool) {
    seed_user(&pool, "refresher", ROLE_ADMIN_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "refresher", TEST_PASSWORD).await;
    let refresh_token = login_json["refreshToken"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "refreshToken": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["accessToken"].is_string());
    assert_ne!(
        json["refreshToken"].as_str().unwrap(),
        refresh_token,
        "refresh token must rotate on use"
    );

    // The old token is revoked and cannot be used again.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refreshToken": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Refreshing with a garbage token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_with_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "refreshToken": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes sessions and returns 204 No Content.
#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_sessions(pool: PgPool) {
    seed_user(&pool, "logoutuser", ROLE_ADMIN_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "logoutuser", TEST_PASSWORD).await;
    let access_token = login_json["accessToken"].as_str().unwrap();
    let refresh_token = login_json["refreshToken"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/auth/logout", serde_json::json!({}), access_token).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token issued at login no longer works.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refreshToken": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Account lockout: after 5 failed login attempts the account is locked.
#[sqlx::test(migrations = "../db/migrations")]
async fn account_lockout_after_failed_attempts(pool: PgPool) {
    seed_user(&pool, "lockme", ROLE_ADMIN_ID).await;

    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "username": "lockme", "password": "wrong_pass" });
        let response = post_json(app, "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // The 6th attempt (even with the correct password) returns 403 (locked).
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "lockme", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    let error_msg = json["error"].as_str().unwrap_or("");
    assert!(
        error_msg.contains("locked"),
        "error message should mention the account is locked, got: {error_msg}"
    );
}

// ---------------------------------------------------------------------------
// Access enforcement
// ---------------------------------------------------------------------------

/// Protected endpoints require authentication -- missing token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn protected_endpoint_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A tampered token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn garbage_bearer_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/projects", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Staff users are forbidden from manager-only writes.
#[sqlx::test(migrations = "../db/migrations")]
async fn staff_cannot_write_projects(pool: PgPool) {
    let staff = seed_user(&pool, "staffer", ROLE_STAFF_ID).await;
    let token = common::token_for(&staff, "staff");

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Forbidden Project" });
    let response = post_json_auth(app, "/api/v1/projects", body, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
