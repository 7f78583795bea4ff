//! Read-only access to the workflow action catalog.

use rigflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::action::{Action, ActionConfig};

pub struct ActionRepo;

impl ActionRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Action>, sqlx::Error> {
        sqlx::query_as::<_, Action>("SELECT id, name, action_type FROM actions ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Action>, sqlx::Error> {
        sqlx::query_as::<_, Action>("SELECT id, name, action_type FROM actions WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Configurable options of an action, in seed order.
    pub async fn list_configs(
        pool: &PgPool,
        action_id: DbId,
    ) -> Result<Vec<ActionConfig>, sqlx::Error> {
        sqlx::query_as::<_, ActionConfig>(
            "SELECT id, action_id, option_name, valid_values \
             FROM action_configs WHERE action_id = $1 ORDER BY id",
        )
        .bind(action_id)
        .fetch_all(pool)
        .await
    }
}
