//! Read-only action catalogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::{action, rig_action};
use crate::state::AppState;

/// Routes mounted at `/actions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(action::list))
        .route("/{id}", get(action::get_by_id))
        .route("/{id}/config", get(action::list_configs))
}

/// Routes mounted at `/rig_actions`.
pub fn rig_action_router() -> Router<AppState> {
    Router::new()
        .route("/", get(rig_action::list))
        .route("/{id}", get(rig_action::get_by_id))
        .route("/{id}/config", get(rig_action::list_configs))
}
