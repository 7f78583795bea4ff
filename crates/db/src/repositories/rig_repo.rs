//! Repository for the `rigs` table.

use rigflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::rig::{CreateRig, Rig, RigSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for rigs.
pub struct RigRepo;

impl RigRepo {
    /// Insert a new rig, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRig) -> Result<Rig, sqlx::Error> {
        let query = format!(
            "INSERT INTO rigs (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rig>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rigs WHERE id = $1");
        sqlx::query_as::<_, Rig>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rigs (id and name), oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<RigSummary>, sqlx::Error> {
        sqlx::query_as::<_, RigSummary>("SELECT id, name FROM rigs ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Delete a rig. Its steps are removed and its phones unassigned by the
    /// foreign keys (`CASCADE` / `SET NULL`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rigs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
