//! HTTP-level tests for the seeded `/actions` and `/rig_actions` catalogs.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_actions_returns_seed(pool: PgPool) {
    let body = body_json(get(common::build_test_app(pool), "/actions").await).await;
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Click on Screen", "type": "click" },
            { "id": 2, "name": "Type Input", "type": "type_input" },
            { "id": 3, "name": "Swipe", "type": "swipe" },
            { "id": 4, "name": "Swipe Until", "type": "swipe_until" },
            { "id": 5, "name": "Set Time Delay", "type": "set_time_delay" },
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_action_config_lists_valid_values(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/actions/2/config").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let configs = body.as_array().unwrap();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0]["option_name"], "Type");
    assert_eq!(configs[0]["valid_values"], json!({ "text": "string" }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_action_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/actions/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), "/actions/99/config").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rig_action_by_id(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/rig_actions/3").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "id": 3, "name": "Add Workflow", "type": "add_workflow" })
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rig_action_config(pool: PgPool) {
    let body = body_json(get(common::build_test_app(pool), "/rig_actions/1/config").await).await;
    assert_eq!(body[0]["option_name"], "Phone");
    assert_eq!(body[0]["valid_values"], json!({ "phone_id": "numeric" }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rig_action_without_config_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/rig_actions/99/config").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
