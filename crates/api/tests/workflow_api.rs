//! HTTP-level tests for the `/workflows` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_workflow_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/workflows",
        json!({
            "name": "Morning run",
            "start_hour": 6,
            "end_hour": 11,
            "start_day": "Monday",
            "end_day": "Friday",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Workflow created");
    assert!(body["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_workflow_renders_full_day_names(pool: PgPool) {
    let id = common::create_workflow(&pool, "Weekdays").await;

    let response = get(common::build_test_app(pool), &format!("/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Weekdays");
    assert_eq!(body["start_hour"], 8);
    assert_eq!(body["end_hour"], 17);
    assert_eq!(body["start_day"], "Monday");
    assert_eq!(body["end_day"], "Friday");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_stored_day_is_symbol(pool: PgPool) {
    let id = common::create_workflow(&pool, "Symbols").await;

    let (start_day,): (String,) = sqlx::query_as("SELECT start_day FROM workflows WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(start_day, "MO");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_day_returns_400_and_creates_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/workflows",
        json!({
            "name": "Bad day",
            "start_hour": 6,
            "end_hour": 11,
            "start_day": "Funday",
            "end_day": "Friday",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].as_str().unwrap().contains("Funday"));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM workflows")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_hour_out_of_range_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/workflows",
        json!({
            "name": "Late",
            "start_hour": 6,
            "end_hour": 24,
            "start_day": "Monday",
            "end_day": "Monday",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_field_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/workflows",
        json!({ "name": "Incomplete", "start_hour": 6 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_workflows_returns_id_and_name(pool: PgPool) {
    let first = common::create_workflow(&pool, "First").await;
    let second = common::create_workflow(&pool, "Second").await;

    let response = get(common::build_test_app(pool), "/workflows").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!([
            { "id": first, "name": "First" },
            { "id": second, "name": "Second" },
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_workflow_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/workflows/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_workflow_removes_its_steps(pool: PgPool) {
    let id = common::create_workflow(&pool, "Doomed").await;
    common::append_step(
        &pool,
        &format!("/workflows/{id}/steps"),
        json!({ "action_id": 1, "selected_value": { "x": 1, "y": 2 } }),
    )
    .await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Workflow deleted");

    let (steps,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM workflow_steps WHERE workflow_id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(steps, 0);

    let response = get(common::build_test_app(pool), &format!("/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_workflow_returns_404(pool: PgPool) {
    let response = delete(common::build_test_app(pool), "/workflows/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
