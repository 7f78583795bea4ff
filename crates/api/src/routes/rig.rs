//! Route definitions for rigs, their steps, and their phones.

use axum::routing::{get, put};
use axum::Router;
use rigflow_db::repositories::RigSteps;

use crate::handlers::{phone, rig, step};
use crate::state::AppState;

/// Routes mounted at `/rigs`.
///
/// ```text
/// GET    /                                list
/// POST   /                                create
/// GET    /{id}                            get_by_id (with phones)
/// DELETE /{id}                            delete
/// GET    /{id}/steps                      list steps
/// POST   /{id}/steps                      append step
/// DELETE /{id}/steps/{step_id}            delete step
/// PUT    /{id}/steps/{step_id}/move_up    swap with predecessor
/// PUT    /{id}/steps/{step_id}/move_down  swap with successor
/// GET    /{id}/phones                     phones on this rig
/// POST   /{id}/phones                     assign a phone
/// DELETE /{id}/phones/{phone_id}          unassign a phone
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rig::list).post(rig::create))
        .route("/{id}", get(rig::get_by_id).delete(rig::delete))
        .route(
            "/{id}/steps",
            get(step::list::<RigSteps>).post(step::create::<RigSteps>),
        )
        .route(
            "/{id}/steps/{step_id}",
            axum::routing::delete(step::delete::<RigSteps>),
        )
        .route("/{id}/steps/{step_id}/move_up", put(step::move_up::<RigSteps>))
        .route(
            "/{id}/steps/{step_id}/move_down",
            put(step::move_down::<RigSteps>),
        )
        .route(
            "/{id}/phones",
            get(phone::list_for_rig).post(phone::assign_to_rig),
        )
        .route(
            "/{id}/phones/{phone_id}",
            axum::routing::delete(phone::remove_from_rig),
        )
}
