//! Workflow action catalog models.

use rigflow_core::catalog::ActionType;
use rigflow_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `actions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Action {
    pub id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    #[serde(rename = "type")]
    pub action_type: ActionType,
}

/// A row from the `action_configs` table: one configurable option of an
/// action and the schema of values it accepts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActionConfig {
    pub id: DbId,
    pub action_id: DbId,
    pub option_name: String,
    pub valid_values: serde_json::Value,
}
