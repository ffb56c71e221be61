//! HTTP-level integration tests for the inventory surface: lookup tables,
//! items, and the database-error mappings they exercise.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status, delete_auth, get_auth, manager_token, post_json_auth, put_json_auth, seed_user,
    token_for, ROLE_STAFF_ID,
};
use sqlx::PgPool;

async fn create_category(pool: &PgPool, token: &str, name: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": name });
    let response = post_json_auth(app, "/api/v1/categories", body, token).await;
    assert_status(response, StatusCode::CREATED).await
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Category CRUD round trip.
#[sqlx::test(migrations = "../db/migrations")]
async fn category_crud(pool: PgPool) {
    let token = manager_token(&pool).await;

    let created = create_category(&pool, &token, "Cameras").await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Cameras");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "description": "Bodies and backs" });
    let response = put_json_auth(app, &format!("/api/v1/categories/{id}"), body, &token).await;
    let updated = assert_status(response, StatusCode::OK).await;
    assert_eq!(updated["name"], "Cameras", "name is untouched by partial update");
    assert_eq!(updated["description"], "Bodies and backs");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/categories", &token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/categories/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/categories/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Duplicate lookup names hit the unique constraint and map to 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_category_name_conflicts(pool: PgPool) {
    let token = manager_token(&pool).await;

    create_category(&pool, &token, "Lighting").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Lighting" });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Conditions come pre-seeded by the migrations.
#[sqlx::test(migrations = "../db/migrations")]
async fn conditions_are_seeded(pool: PgPool) {
    let token = manager_token(&pool).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/conditions", &token).await;
    let json = assert_status(response, StatusCode::OK).await;

    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"New"), "seeded conditions should include New, got {names:?}");
}

/// Staff can read lookup tables but not write them.
#[sqlx::test(migrations = "../db/migrations")]
async fn staff_cannot_write_lookups(pool: PgPool) {
    let staff = seed_user(&pool, "lookup_staff", ROLE_STAFF_ID).await;
    let token = token_for(&staff, "staff");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/locations", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Warehouse B" });
    let response = post_json_auth(app, "/api/v1/locations", body, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Item creation defaults quantity to 1 and round-trips its fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_defaults(pool: PgPool) {
    let token = manager_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Alexa Mini",
        "serialNumber": "AM-0042",
        "dailyRate": 950.0,
    });
    let response = post_json_auth(app, "/api/v1/items", body, &token).await;
    let json = assert_status(response, StatusCode::CREATED).await;

    assert_eq!(json["name"], "Alexa Mini");
    assert_eq!(json["serialNumber"], "AM-0042");
    assert_eq!(json["quantity"], 1, "quantity defaults to 1");
    assert_eq!(json["dailyRate"], 950.0);
}

/// Negative quantities are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_rejects_negative_quantity(pool: PgPool) {
    let token = manager_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Ghost Gear", "quantity": -3 });
    let response = post_json_auth(app, "/api/v1/items", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Referencing a nonexistent category trips the FK and maps to 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_item_with_bad_category_returns_400(pool: PgPool) {
    let token = manager_token(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Orphan", "categoryId": 999999 });
    let response = post_json_auth(app, "/api/v1/items", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The item list resolves lookup names and filters by category.
#[sqlx::test(migrations = "../db/migrations")]
async fn item_list_filters_by_category(pool: PgPool) {
    let token = manager_token(&pool).await;

    let cameras = create_category(&pool, &token, "Cameras").await;
    let audio = create_category(&pool, &token, "Audio").await;
    let cameras_id = cameras["id"].as_i64().unwrap();
    let audio_id = audio["id"].as_i64().unwrap();

    for (name, cat) in [("Alexa", cameras_id), ("C300", cameras_id), ("Boom Mic", audio_id)] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "name": name, "categoryId": cat });
        let response = post_json_auth(app, "/api/v1/items", body, &token).await;
        assert_status(response, StatusCode::CREATED).await;
    }

    let app = common::build_test_app(pool.clone());
    let response =
        get_auth(app, &format!("/api/v1/items?categoryId={cameras_id}"), &token).await;
    let json = assert_status(response, StatusCode::OK).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|i| i["categoryName"] == "Cameras"));

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/items", &token).await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json.as_array().unwrap().len(), 3, "unfiltered list has all items");
}

/// Partial item update leaves omitted fields alone.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_item_is_partial(pool: PgPool) {
    let token = manager_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Tripod", "quantity": 4 });
    let response = post_json_auth(app, "/api/v1/items", body, &token).await;
    let created = assert_status(response, StatusCode::CREATED).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "quantity": 6 });
    let response = put_json_auth(app, &format!("/api/v1/items/{id}"), body, &token).await;
    let updated = assert_status(response, StatusCode::OK).await;

    assert_eq!(updated["name"], "Tripod");
    assert_eq!(updated["quantity"], 6);
}
