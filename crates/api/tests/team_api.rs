//! HTTP-level integration tests for `/projects/{project_id}/team`: assignment
//! CRUD, overlap rejection, and exclusive-usage enforcement.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status, delete_auth, get_auth, manager_token, post_json_auth, put_json_auth, seed_user,
    seed_user_exclusive, ROLE_STAFF_ID,
};
use gearbase_core::types::DbId;
use sqlx::PgPool;

/// Create a project via the API and return its id.
async fn create_project(pool: &PgPool, token: &str, name: &str) -> DbId {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": name });
    let response = post_json_auth(app, "/api/v1/projects", body, token).await;
    let json = assert_status(response, StatusCode::CREATED).await;
    json["id"].as_i64().unwrap()
}

fn assignment_body(user_id: DbId, start: &str, end: &str) -> serde_json::Value {
    serde_json::json!({
        "userId": user_id,
        "projectRoleId": 1,
        "startDate": start,
        "endDate": end,
    })
}

async fn post_assignment(
    pool: &PgPool,
    token: &str,
    project_id: DbId,
    body: serde_json::Value,
) -> axum::http::Response<axum::body::Body> {
    let app = common::build_test_app(pool.clone());
    post_json_auth(app, &format!("/api/v1/projects/{project_id}/team"), body, token).await
}

// ---------------------------------------------------------------------------
// CRUD and round trips
// ---------------------------------------------------------------------------

/// Creating an assignment returns 201 with resolved user and role names.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_assignment_returns_names(pool: PgPool) {
    let token = manager_token(&pool).await;
    let project_id = create_project(&pool, &token, "Crewed Up").await;
    let worker = seed_user(&pool, "crew_member", ROLE_STAFF_ID).await;

    let body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    let response = post_assignment(&pool, &token, project_id, body).await;
    let json = assert_status(response, StatusCode::CREATED).await;

    assert_eq!(json["userId"], worker.id);
    assert_eq!(json["userName"], "crew_member");
    assert_eq!(json["roleName"], "DIT");
    assert_eq!(json["startDate"], "2026-09-01");
    assert_eq!(json["endDate"], "2026-09-10");

    // The team list includes the new assignment.
    let app = common::build_test_app(pool);
    let response =
        get_auth(app, &format!("/api/v1/projects/{project_id}/team"), &token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

/// Missing required fields return 400 with a field-specific message.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_assignment_rejects_missing_fields(pool: PgPool) {
    let token = manager_token(&pool).await;
    let project_id = create_project(&pool, &token, "Incomplete").await;

    let body = serde_json::json!({
        "projectRoleId": 1,
        "startDate": "2026-09-01",
        "endDate": "2026-09-10",
    });
    let response = post_assignment(&pool, &token, project_id, body).await;
    let json = assert_status(response, StatusCode::BAD_REQUEST).await;
    assert!(
        json["error"].as_str().unwrap().contains("userId"),
        "error should name the missing field"
    );
}

/// An inverted assignment range returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_assignment_rejects_inverted_range(pool: PgPool) {
    let token = manager_token(&pool).await;
    let project_id = create_project(&pool, &token, "Backwards").await;
    let worker = seed_user(&pool, "backwards_crew", ROLE_STAFF_ID).await;

    let body = assignment_body(worker.id, "2026-09-10", "2026-09-01");
    let response = post_assignment(&pool, &token, project_id, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Assignments under a nonexistent project return 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn assignment_on_missing_project_returns_404(pool: PgPool) {
    let token = manager_token(&pool).await;
    let worker = seed_user(&pool, "lost_crew", ROLE_STAFF_ID).await;

    let body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    let response = post_assignment(&pool, &token, 999999, body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting an assignment returns 204; deleting again returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_assignment(pool: PgPool) {
    let token = manager_token(&pool).await;
    let project_id = create_project(&pool, &token, "Short Lived").await;
    let worker = seed_user(&pool, "brief_crew", ROLE_STAFF_ID).await;

    let body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    let response = post_assignment(&pool, &token, project_id, body).await;
    let json = assert_status(response, StatusCode::CREATED).await;
    let id = json["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        delete_auth(app, &format!("/api/v1/projects/{project_id}/team/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response =
        delete_auth(app, &format!("/api/v1/projects/{project_id}/team/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Overlap rules
// ---------------------------------------------------------------------------

/// A second assignment overlapping the first for the same user on the same
/// project is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn overlapping_assignment_is_rejected(pool: PgPool) {
    let token = manager_token(&pool).await;
    let project_id = create_project(&pool, &token, "Double Booked").await;
    let worker = seed_user(&pool, "busy_crew", ROLE_STAFF_ID).await;

    let body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    let response = post_assignment(&pool, &token, project_id, body).await;
    assert_status(response, StatusCode::CREATED).await;

    let body = assignment_body(worker.id, "2026-09-05", "2026-09-15");
    let response = post_assignment(&pool, &token, project_id, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Ranges that merely touch at a boundary day still overlap (inclusive ends).
#[sqlx::test(migrations = "../db/migrations")]
async fn boundary_touching_ranges_overlap(pool: PgPool) {
    let token = manager_token(&pool).await;
    let project_id = create_project(&pool, &token, "Edge Case").await;
    let worker = seed_user(&pool, "edge_crew", ROLE_STAFF_ID).await;

    let body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    let response = post_assignment(&pool, &token, project_id, body).await;
    assert_status(response, StatusCode::CREATED).await;

    // Starts on the exact day the first assignment ends.
    let body = assignment_body(worker.id, "2026-09-10", "2026-09-20");
    let response = post_assignment(&pool, &token, project_id, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Back-to-back non-overlapping ranges are fine.
#[sqlx::test(migrations = "../db/migrations")]
async fn adjacent_ranges_are_allowed(pool: PgPool) {
    let token = manager_token(&pool).await;
    let project_id = create_project(&pool, &token, "Tight Schedule").await;
    let worker = seed_user(&pool, "seq_crew", ROLE_STAFF_ID).await;

    let body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    let response = post_assignment(&pool, &token, project_id, body).await;
    assert_status(response, StatusCode::CREATED).await;

    let body = assignment_body(worker.id, "2026-09-11", "2026-09-20");
    let response = post_assignment(&pool, &token, project_id, body).await;
    assert_status(response, StatusCode::CREATED).await;
}

/// Updating an assignment excludes the row itself from the overlap check, so
/// re-saving the same dates succeeds.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_excludes_own_row_from_overlap(pool: PgPool) {
    let token = manager_token(&pool).await;
    let project_id = create_project(&pool, &token, "Self Update").await;
    let worker = seed_user(&pool, "stable_crew", ROLE_STAFF_ID).await;

    let body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    let response = post_assignment(&pool, &token, project_id, body).await;
    let json = assert_status(response, StatusCode::CREATED).await;
    let id = json["id"].as_i64().unwrap();

    // Same user, same dates, different role id.
    let mut body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    body["projectRoleId"] = serde_json::json!(2);
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/projects/{project_id}/team/{id}"),
        body,
        &token,
    )
    .await;

    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["roleName"], "Data Manager");
}

/// The same user may hold overlapping ranges on *different* projects, as long
/// as they are not flagged exclusive.
#[sqlx::test(migrations = "../db/migrations")]
async fn cross_project_overlap_allowed_for_regular_users(pool: PgPool) {
    let token = manager_token(&pool).await;
    let first = create_project(&pool, &token, "First").await;
    let second = create_project(&pool, &token, "Second").await;
    let worker = seed_user(&pool, "shared_crew", ROLE_STAFF_ID).await;

    let body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    let response = post_assignment(&pool, &token, first, body).await;
    assert_status(response, StatusCode::CREATED).await;

    let body = assignment_body(worker.id, "2026-09-05", "2026-09-15");
    let response = post_assignment(&pool, &token, second, body).await;
    assert_status(response, StatusCode::CREATED).await;
}

/// An exclusive-usage user cannot overlap assignments across projects; the
/// conflict is a 409 naming the other project.
#[sqlx::test(migrations = "../db/migrations")]
async fn exclusive_user_cross_project_conflict(pool: PgPool) {
    let token = manager_token(&pool).await;
    let first = create_project(&pool, &token, "Flagship").await;
    let second = create_project(&pool, &token, "Side Gig").await;
    let worker = seed_user_exclusive(&pool, "exclusive_crew", ROLE_STAFF_ID, true).await;

    let body = assignment_body(worker.id, "2026-09-01", "2026-09-10");
    let response = post_assignment(&pool, &token, first, body).await;
    assert_status(response, StatusCode::CREATED).await;

    let body = assignment_body(worker.id, "2026-09-05", "2026-09-15");
    let response = post_assignment(&pool, &token, second, body).await;

    let json = assert_status(response, StatusCode::CONFLICT).await;
    assert!(
        json["error"].as_str().unwrap().contains("Flagship"),
        "conflict should name the blocking project"
    );
}

/// Exclusive users can still hold non-overlapping assignments on different
/// projects.
#[sqlx::test(migrations = "../db/migrations")]
async fn exclusive_user_non_overlapping_is_fine(pool: PgPool) {
    let token = manager_token(&pool).await;
    let first = create_project(&pool, &token, "Spring Job").await;
    let second = create_project(&pool, &token, "Autumn Job").await;
    let worker = seed_user_exclusive(&pool, "serial_crew", ROLE_STAFF_ID, true).await;

    let body = assignment_body(worker.id, "2026-04-01", "2026-04-20");
    let response = post_assignment(&pool, &token, first, body).await;
    assert_status(response, StatusCode::CREATED).await;

    let body = assignment_body(worker.id, "2026-10-01", "2026-10-20");
    let response = post_assignment(&pool, &token, second, body).await;
    assert_status(response, StatusCode::CREATED).await;
}
