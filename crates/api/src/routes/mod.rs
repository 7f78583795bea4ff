pub mod action;
pub mod health;
pub mod phone;
pub mod rig;
pub mod workflow;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /workflows                                   list, create
/// /workflows/{id}                              get, delete
/// /workflows/{id}/steps                        list, append
/// /workflows/{id}/steps/{step_id}              delete
/// /workflows/{id}/steps/{step_id}/move_up      swap up (PUT)
/// /workflows/{id}/steps/{step_id}/move_down    swap down (PUT)
///
/// /rigs                                        list, create
/// /rigs/{id}                                   get (with phones), delete
/// /rigs/{id}/steps                             list, append
/// /rigs/{id}/steps/{step_id}                   delete
/// /rigs/{id}/steps/{step_id}/move_up           swap up (PUT)
/// /rigs/{id}/steps/{step_id}/move_down         swap down (PUT)
/// /rigs/{id}/phones                            list, assign
/// /rigs/{id}/phones/{phone_id}                 unassign
///
/// /phones                                      list, create
/// /phones/{id}                                 get
///
/// /actions                                     list
/// /actions/{id}                                get
/// /actions/{id}/config                         option catalog
///
/// /rig_actions                                 list
/// /rig_actions/{id}                            get
/// /rig_actions/{id}/config                     option catalog
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/workflows", workflow::router())
        .nest("/rigs", rig::router())
        .nest("/phones", phone::router())
        .nest("/actions", action::router())
        .nest("/rig_actions", action::rig_action_router())
}
