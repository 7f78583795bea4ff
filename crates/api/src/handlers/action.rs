//! Handlers for the read-only `/actions` catalog.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use rigflow_core::error::CoreError;
use rigflow_core::types::DbId;
use rigflow_db::repositories::ActionRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn action_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Action",
        id,
    })
}

/// GET /actions
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let actions = ActionRepo::list(&state.pool).await?;
    Ok(Json(actions))
}

/// GET /actions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let action = ActionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| action_not_found(id))?;
    Ok(Json(action))
}

/// GET /actions/{id}/config
///
/// The options the action accepts and their valid values.
pub async fn list_configs(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ActionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| action_not_found(id))?;
    let configs = ActionRepo::list_configs(&state.pool, id).await?;
    Ok(Json(configs))
}
