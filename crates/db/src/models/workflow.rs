//! Workflow entity model and DTOs.

use rigflow_core::types::{DbId, Timestamp};
use rigflow_core::weekday::Weekday;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `workflows` table.
///
/// `start_day`..`end_day` and `start_hour`..`end_hour` describe the
/// recurring window during which the workflow's steps apply.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workflow {
    pub id: DbId,
    pub name: String,
    pub start_hour: i32,
    pub end_hour: i32,
    #[sqlx(try_from = "String")]
    pub start_day: Weekday,
    #[sqlx(try_from = "String")]
    pub end_day: Weekday,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing projection: id and name only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkflowSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a workflow. Days are already parsed to symbols.
#[derive(Debug, Clone)]
pub struct CreateWorkflow {
    pub name: String,
    pub start_hour: i32,
    pub end_hour: i32,
    pub start_day: Weekday,
    pub end_day: Weekday,
}
