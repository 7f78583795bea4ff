//! Rig action catalog models.

use rigflow_core::catalog::RigActionType;
use rigflow_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rig_actions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RigAction {
    pub id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    #[serde(rename = "type")]
    pub action_type: RigActionType,
}

/// A row from the `rig_action_configs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RigActionConfig {
    pub id: DbId,
    pub rig_action_id: DbId,
    pub option_name: String,
    pub valid_values: serde_json::Value,
}
