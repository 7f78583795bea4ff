//! Repository for the `workflows` table.

use rigflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::workflow::{CreateWorkflow, Workflow, WorkflowSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, start_hour, end_hour, start_day, end_day, created_at, updated_at";

/// Provides CRUD operations for workflows.
pub struct WorkflowRepo;

impl WorkflowRepo {
    /// Insert a new workflow, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWorkflow) -> Result<Workflow, sqlx::Error> {
        let query = format!(
            "INSERT INTO workflows (name, start_hour, end_hour, start_day, end_day) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workflow>(&query)
            .bind(&input.name)
            .bind(input.start_hour)
            .bind(input.end_hour)
            .bind(input.start_day.as_str())
            .bind(input.end_day.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Workflow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workflows WHERE id = $1");
        sqlx::query_as::<_, Workflow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all workflows (id and name), oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<WorkflowSummary>, sqlx::Error> {
        sqlx::query_as::<_, WorkflowSummary>("SELECT id, name FROM workflows ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Delete a workflow. Its steps go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workflows WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
