//! Rig entity model and DTOs.

use rigflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `rigs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rig {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing projection: id and name only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RigSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a rig.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRig {
    pub name: String,
    pub description: Option<String>,
}
