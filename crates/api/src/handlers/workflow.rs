//! Handlers for the `/workflows` resource.
//!
//! Step-list routes under `/workflows/{id}/steps` are served by the
//! generic handlers in [`crate::handlers::step`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rigflow_core::error::CoreError;
use rigflow_core::types::DbId;
use rigflow_db::repositories::WorkflowRepo;

use crate::error::{AppError, AppResult};
use crate::request::{AppJson, CreateWorkflowRequest};
use crate::response::{CreatedResponse, MessageResponse, WorkflowResponse};
use crate::state::AppState;

/// POST /workflows
///
/// Create a workflow. `start_day`/`end_day` are weekday names.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateWorkflowRequest>,
) -> AppResult<impl IntoResponse> {
    let input = input.into_create()?;
    let workflow = WorkflowRepo::create(&state.pool, &input).await?;
    tracing::info!(id = workflow.id, name = %workflow.name, "Workflow created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Workflow created",
            id: workflow.id,
        }),
    ))
}

/// GET /workflows
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let workflows = WorkflowRepo::list(&state.pool).await?;
    Ok(Json(workflows))
}

/// GET /workflows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let workflow = WorkflowRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Workflow",
            id,
        }))?;
    Ok(Json(WorkflowResponse::from(workflow)))
}

/// DELETE /workflows/{id}
///
/// Deletes the workflow and all of its steps.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !WorkflowRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Workflow",
            id,
        }));
    }
    tracing::info!(id, "Workflow deleted");
    Ok(Json(MessageResponse {
        message: "Workflow deleted",
    }))
}
