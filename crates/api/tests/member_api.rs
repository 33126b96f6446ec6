//! HTTP-level integration tests for the members resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use sqlx::PgPool;

fn alice() -> serde_json::Value {
    serde_json::json!({
        "name": "Alice",
        "email": "alice@example.com",
        "role": "developer",
        "avatar": "https://example.com/a.png"
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_member_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(app, "/api/members", alice()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["role"], "developer");
    assert_eq!(json["avatar"], "https://example.com/a.png");
}

#[sqlx::test]
async fn create_member_avatar_is_optional(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/api/members",
        serde_json::json!({"name": "Bob", "email": "bob@example.com", "role": "designer"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["avatar"], serde_json::Value::Null);
}

#[sqlx::test]
async fn create_member_missing_required_field_returns_400(pool: PgPool) {
    for body in [
        serde_json::json!({"email": "x@example.com", "role": "dev"}),
        serde_json::json!({"name": "X", "role": "dev"}),
        serde_json::json!({"name": "X", "email": "x@example.com"}),
    ] {
        let app = common::build_test_app(pool.clone()).await;
        let response = post_json(app, "/api/members", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test]
async fn duplicate_email_returns_400_and_adds_no_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let first = post_json(app, "/api/members", alice()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone()).await;
    let second = post_json(app, "/api/members", alice()).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let json = body_json(second).await;
    assert_eq!(json["error"], "Email already exists");

    let app = common::build_test_app(pool).await;
    let json = body_json(get(app, "/api/members").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn delete_member_removes_it_from_list(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let created = body_json(post_json(app, "/api/members", alice()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let response = delete(app, &format!("/api/members/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Member deleted successfully");

    let app = common::build_test_app(pool).await;
    let json = body_json(get(app, "/api/members").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn delete_nonexistent_member_returns_404_and_leaves_table_unchanged(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    post_json(app, "/api/members", alice()).await;

    let app = common::build_test_app(pool.clone()).await;
    let response = delete(app, "/api/members/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Member not found");

    let app = common::build_test_app(pool).await;
    let json = body_json(get(app, "/api/members").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}
