//! Handlers for the read-only `/rig_actions` catalog.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use rigflow_core::error::CoreError;
use rigflow_core::types::DbId;
use rigflow_db::repositories::RigActionRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /rig_actions
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let actions = RigActionRepo::list(&state.pool).await?;
    Ok(Json(actions))
}

/// GET /rig_actions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let action = RigActionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RIG Action",
            id,
        }))?;
    Ok(Json(action))
}

/// GET /rig_actions/{id}/config
///
/// 404 when the rig action has no configuration (including when it does
/// not exist).
pub async fn list_configs(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let configs = RigActionRepo::list_configs(&state.pool, id).await?;
    if configs.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "RIG Action configuration",
            id,
        }));
    }
    Ok(Json(configs))
}
