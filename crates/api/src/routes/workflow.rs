//! Route definitions for workflows and their steps.

use axum::routing::{get, put};
use axum::Router;
use rigflow_db::repositories::WorkflowSteps;

use crate::handlers::{step, workflow};
use crate::state::AppState;

/// Routes mounted at `/workflows`.
///
/// ```text
/// GET    /                                list
/// POST   /                                create
/// GET    /{id}                            get_by_id
/// DELETE /{id}                            delete
/// GET    /{id}/steps                      list steps
/// POST   /{id}/steps                      append step
/// DELETE /{id}/steps/{step_id}            delete step
/// PUT    /{id}/steps/{step_id}/move_up    swap with predecessor
/// PUT    /{id}/steps/{step_id}/move_down  swap with successor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workflow::list).post(workflow::create))
        .route("/{id}", get(workflow::get_by_id).delete(workflow::delete))
        .route(
            "/{id}/steps",
            get(step::list::<WorkflowSteps>).post(step::create::<WorkflowSteps>),
        )
        .route(
            "/{id}/steps/{step_id}",
            axum::routing::delete(step::delete::<WorkflowSteps>),
        )
        .route(
            "/{id}/steps/{step_id}/move_up",
            put(step::move_up::<WorkflowSteps>),
        )
        .route(
            "/{id}/steps/{step_id}/move_down",
            put(step::move_down::<WorkflowSteps>),
        )
}
