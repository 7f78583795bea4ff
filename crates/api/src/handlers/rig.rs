//! Handlers for the `/rigs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rigflow_core::error::CoreError;
use rigflow_core::types::DbId;
use rigflow_core::validation::{validate_description, validate_name};
use rigflow_db::models::rig::{CreateRig, Rig};
use rigflow_db::repositories::{PhoneRepo, RigRepo};

use crate::error::{AppError, AppResult};
use crate::request::AppJson;
use crate::response::{CreatedResponse, MessageResponse, RigDetailResponse};
use crate::state::AppState;

/// Load a rig or fail with 404.
pub(crate) async fn ensure_rig_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Rig> {
    RigRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "RIG", id }))
}

/// POST /rigs
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateRig>,
) -> AppResult<impl IntoResponse> {
    validate_name("RIG", &input.name)?;
    if let Some(description) = &input.description {
        validate_description(description)?;
    }
    input.name = input.name.trim().to_string();

    let rig = RigRepo::create(&state.pool, &input).await?;
    tracing::info!(id = rig.id, name = %rig.name, "RIG created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "RIG created",
            id: rig.id,
        }),
    ))
}

/// GET /rigs
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rigs = RigRepo::list(&state.pool).await?;
    Ok(Json(rigs))
}

/// GET /rigs/{id}
///
/// The rig plus the phones currently mounted on it.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rig = ensure_rig_exists(&state.pool, id).await?;
    let phones = PhoneRepo::list_by_rig(&state.pool, id).await?;
    Ok(Json(RigDetailResponse::new(rig, phones)))
}

/// DELETE /rigs/{id}
///
/// Deletes the rig and its steps; its phones become unassigned.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !RigRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "RIG", id }));
    }
    tracing::info!(id, "RIG deleted");
    Ok(Json(MessageResponse {
        message: "RIG deleted",
    }))
}
