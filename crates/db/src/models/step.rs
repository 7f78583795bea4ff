//! Step models shared by workflow and rig step lists.
//!
//! Both step tables have the same shape; only the owner and action column
//! names differ. Queries alias them to `owner_id` / `action_id`.

use rigflow_core::error::CoreError;
use rigflow_core::step_order::SwapPlan;
use rigflow_core::types::{DbId, StepOrder, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `workflow_steps` or `rig_steps`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Step {
    pub id: DbId,
    pub owner_id: DbId,
    pub action_id: DbId,
    pub selected_value: serde_json::Value,
    pub step_order: StepOrder,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One entry of an ordered step listing, annotated with the action name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StepListing {
    pub step_id: DbId,
    pub step_order: StepOrder,
    pub action_id: DbId,
    pub action: String,
    pub selected_value: serde_json::Value,
}

/// DTO for appending a step.
///
/// Rig clients send `rig_action_id`; it is accepted as an alias. When
/// `step_order` is omitted the step goes to the end of the list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStep {
    #[serde(alias = "rig_action_id")]
    pub action_id: DbId,
    #[serde(default = "empty_document")]
    pub selected_value: serde_json::Value,
    pub step_order: Option<StepOrder>,
}

fn empty_document() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Result of [`StepRepo::append`](crate::repositories::StepRepo::append).
#[derive(Debug)]
pub enum AppendOutcome {
    Created(Step),
    OwnerNotFound,
    ActionNotFound,
    /// Another step of the same owner already holds this order.
    DuplicateOrder(StepOrder),
    /// The order could not be assigned.
    Refused(CoreError),
}

/// Result of [`StepRepo::move_step`](crate::repositories::StepRepo::move_step).
#[derive(Debug)]
pub enum MoveOutcome {
    Moved(SwapPlan),
    OwnerNotFound,
    StepNotFound,
    /// The swap was refused, normally `CoreError::AlreadyAtBoundary`.
    Refused(CoreError),
}
