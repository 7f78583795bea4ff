//! Handlers for `/phones` and phone assignment under `/rigs/{id}/phones`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rigflow_core::error::CoreError;
use rigflow_core::types::DbId;
use rigflow_core::validation::validate_serial_number;
use rigflow_db::models::phone::{AssignOutcome, AssignPhone, CreatePhone};
use rigflow_db::repositories::phone_repo::SERIAL_NUMBER_CONSTRAINT;
use rigflow_db::repositories::PhoneRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::rig::ensure_rig_exists;
use crate::request::AppJson;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

fn phone_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Phone",
        id,
    })
}

/// POST /phones
///
/// Register an unassigned phone. Serial numbers are unique.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePhone>,
) -> AppResult<impl IntoResponse> {
    validate_serial_number(&input.serial_number)?;

    let phone = PhoneRepo::create(&state.pool, &input).await.map_err(|e| {
        if rigflow_db::is_unique_violation(&e, SERIAL_NUMBER_CONSTRAINT) {
            AppError::Core(CoreError::Validation(
                "Phone with this serial number already exists".to_string(),
            ))
        } else {
            AppError::Database(e)
        }
    })?;

    tracing::info!(id = phone.id, serial_number = %phone.serial_number, "Phone created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Phone created",
            id: phone.id,
        }),
    ))
}

/// GET /phones
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let phones = PhoneRepo::list(&state.pool).await?;
    Ok(Json(phones))
}

/// GET /phones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let phone = PhoneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| phone_not_found(id))?;
    Ok(Json(phone))
}

/// GET /rigs/{rig_id}/phones
pub async fn list_for_rig(
    State(state): State<AppState>,
    Path(rig_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_rig_exists(&state.pool, rig_id).await?;
    let phones = PhoneRepo::list_by_rig(&state.pool, rig_id).await?;
    Ok(Json(phones))
}

/// POST /rigs/{rig_id}/phones
///
/// Mount a phone on the rig. A phone already on another rig is moved.
pub async fn assign_to_rig(
    State(state): State<AppState>,
    Path(rig_id): Path<DbId>,
    AppJson(input): AppJson<AssignPhone>,
) -> AppResult<impl IntoResponse> {
    let phone = match PhoneRepo::assign_to_rig(&state.pool, input.phone_id, rig_id).await? {
        AssignOutcome::Assigned(phone) => phone,
        AssignOutcome::RigNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "RIG",
                id: rig_id,
            }))
        }
        AssignOutcome::PhoneNotFound => return Err(phone_not_found(input.phone_id)),
    };

    tracing::info!(phone_id = phone.id, rig_id, "Phone assigned to RIG");
    Ok(Json(MessageResponse {
        message: "Phone assigned to RIG",
    }))
}

/// DELETE /rigs/{rig_id}/phones/{phone_id}
///
/// Unmount a phone. Fails with 404 unless the phone is on this rig.
pub async fn remove_from_rig(
    State(state): State<AppState>,
    Path((rig_id, phone_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    PhoneRepo::unassign_from_rig(&state.pool, rig_id, phone_id)
        .await?
        .ok_or_else(|| phone_not_found(phone_id))?;

    tracing::info!(phone_id, rig_id, "Phone removed from RIG");
    Ok(Json(MessageResponse {
        message: "Phone removed from RIG",
    }))
}
