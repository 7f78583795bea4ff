//! Response bodies shared by API handlers.

use rigflow_core::step_order::StepSlot;
use rigflow_core::types::{DbId, StepOrder};
use rigflow_db::models::phone::RigPhone;
use rigflow_db::models::rig::Rig;
use rigflow_db::models::workflow::Workflow;
use serde::Serialize;

use crate::request::weekday_full_name;

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body of a 201 for workflows, rigs, and phones.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// Body of a 201 for an appended step.
#[derive(Debug, Serialize)]
pub struct StepCreatedResponse {
    pub message: &'static str,
    pub step_id: DbId,
    pub step_order: StepOrder,
}

/// Body of a successful move: both rows with their new orders.
#[derive(Debug, Serialize)]
pub struct StepMovedResponse {
    pub message: &'static str,
    pub moved: StepSlot,
    pub displaced: StepSlot,
}

/// A workflow with its days rendered as full weekday names.
#[derive(Debug, Serialize)]
pub struct WorkflowResponse {
    pub id: DbId,
    pub name: String,
    pub start_hour: i32,
    pub end_hour: i32,
    pub start_day: &'static str,
    pub end_day: &'static str,
}

impl From<Workflow> for WorkflowResponse {
    fn from(w: Workflow) -> Self {
        Self {
            id: w.id,
            name: w.name,
            start_hour: w.start_hour,
            end_hour: w.end_hour,
            start_day: weekday_full_name(w.start_day),
            end_day: weekday_full_name(w.end_day),
        }
    }
}

/// A rig together with the phones mounted on it.
#[derive(Debug, Serialize)]
pub struct RigDetailResponse {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub phones: Vec<RigPhone>,
}

impl RigDetailResponse {
    pub fn new(rig: Rig, phones: Vec<RigPhone>) -> Self {
        Self {
            id: rig.id,
            name: rig.name,
            description: rig.description,
            phones,
        }
    }
}
