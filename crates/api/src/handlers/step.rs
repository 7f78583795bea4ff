//! Step-list handlers shared by `/workflows/{id}/steps` and `/rigs/{id}/steps`.
//!
//! Each handler is generic over a [`StepOwner`] and is mounted once per
//! owner kind, e.g. `get(step::list::<WorkflowSteps>)`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rigflow_core::error::CoreError;
use rigflow_core::step_order::{validate_step_order, MoveDirection};
use rigflow_core::types::DbId;
use rigflow_db::models::step::{AppendOutcome, CreateStep, MoveOutcome};
use rigflow_db::repositories::{StepOwner, StepRepo};

use crate::error::{AppError, AppResult};
use crate::request::AppJson;
use crate::response::{MessageResponse, StepCreatedResponse, StepMovedResponse};
use crate::state::AppState;

fn owner_not_found<O: StepOwner>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: O::ENTITY,
        id,
    })
}

fn step_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Step", id })
}

/// GET /{owner}/{id}/steps
///
/// Steps in ascending `step_order`, each with its action's name.
pub async fn list<O: StepOwner>(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !StepRepo::<O>::owner_exists(&state.pool, owner_id).await? {
        return Err(owner_not_found::<O>(owner_id));
    }
    let steps = StepRepo::<O>::list(&state.pool, owner_id).await?;
    Ok(Json(steps))
}

/// POST /{owner}/{id}/steps
///
/// Append a step. `step_order` is optional; when given it must be
/// non-negative and unused within this owner.
pub async fn create<O: StepOwner>(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
    AppJson(input): AppJson<CreateStep>,
) -> AppResult<impl IntoResponse> {
    if let Some(order) = input.step_order {
        validate_step_order(order)?;
    }

    let outcome = StepRepo::<O>::append(&state.pool, owner_id, &input)
        .await
        .map_err(|e| {
            // Backstop for the in-transaction duplicate check.
            if rigflow_db::is_unique_violation(&e, O::ORDER_CONSTRAINT) {
                AppError::Core(CoreError::Validation(
                    "step_order is already used by another step".to_string(),
                ))
            } else {
                AppError::Database(e)
            }
        })?;

    match outcome {
        AppendOutcome::Created(step) => {
            tracing::info!(
                owner = O::ENTITY,
                owner_id,
                step_id = step.id,
                step_order = step.step_order,
                "Step appended",
            );
            Ok((
                StatusCode::CREATED,
                Json(StepCreatedResponse {
                    message: "Step added",
                    step_id: step.id,
                    step_order: step.step_order,
                }),
            ))
        }
        AppendOutcome::OwnerNotFound => Err(owner_not_found::<O>(owner_id)),
        AppendOutcome::ActionNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: O::ACTION_ENTITY,
            id: input.action_id,
        })),
        AppendOutcome::DuplicateOrder(order) => Err(AppError::Core(CoreError::Validation(
            format!("step_order {order} is already used by another step of this {}", O::ENTITY),
        ))),
        AppendOutcome::Refused(e) => Err(e.into()),
    }
}

/// DELETE /{owner}/{id}/steps/{step_id}
///
/// Other steps keep their order values.
pub async fn delete<O: StepOwner>(
    State(state): State<AppState>,
    Path((owner_id, step_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    if !StepRepo::<O>::delete(&state.pool, owner_id, step_id).await? {
        return Err(step_not_found(step_id));
    }
    tracing::info!(owner = O::ENTITY, owner_id, step_id, "Step deleted");
    Ok(Json(MessageResponse {
        message: "Step deleted",
    }))
}

/// PUT /{owner}/{id}/steps/{step_id}/move_up
pub async fn move_up<O: StepOwner>(
    State(state): State<AppState>,
    Path((owner_id, step_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    move_step::<O>(&state, owner_id, step_id, MoveDirection::Up).await
}

/// PUT /{owner}/{id}/steps/{step_id}/move_down
pub async fn move_down<O: StepOwner>(
    State(state): State<AppState>,
    Path((owner_id, step_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    move_step::<O>(&state, owner_id, step_id, MoveDirection::Down).await
}

async fn move_step<O: StepOwner>(
    state: &AppState,
    owner_id: DbId,
    step_id: DbId,
    direction: MoveDirection,
) -> AppResult<Json<StepMovedResponse>> {
    match StepRepo::<O>::move_step(&state.pool, owner_id, step_id, direction).await? {
        MoveOutcome::Moved(plan) => {
            tracing::info!(
                owner = O::ENTITY,
                owner_id,
                step_id,
                new_order = plan.moved.step_order,
                displaced_step_id = plan.displaced.step_id,
                direction = direction.label(),
                "Step moved",
            );
            let message = match direction {
                MoveDirection::Up => "Step moved up",
                MoveDirection::Down => "Step moved down",
            };
            Ok(Json(StepMovedResponse {
                message,
                moved: plan.moved,
                displaced: plan.displaced,
            }))
        }
        MoveOutcome::OwnerNotFound => Err(owner_not_found::<O>(owner_id)),
        MoveOutcome::StepNotFound => Err(step_not_found(step_id)),
        MoveOutcome::Refused(e) => Err(e.into()),
    }
}
