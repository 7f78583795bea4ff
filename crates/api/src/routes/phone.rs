use axum::routing::get;
use axum::Router;

use crate::handlers::phone;
use crate::state::AppState;

/// Routes mounted at `/phones`.
///
/// ```text
/// GET  /       list
/// POST /       create
/// GET  /{id}   get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(phone::list).post(phone::create))
        .route("/{id}", get(phone::get_by_id))
}
