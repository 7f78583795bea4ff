//! Read-only access to the rig action catalog.

use rigflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::rig_action::{RigAction, RigActionConfig};

pub struct RigActionRepo;

impl RigActionRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<RigAction>, sqlx::Error> {
        sqlx::query_as::<_, RigAction>("SELECT id, name, action_type FROM rig_actions ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RigAction>, sqlx::Error> {
        sqlx::query_as::<_, RigAction>(
            "SELECT id, name, action_type FROM rig_actions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn list_configs(
        pool: &PgPool,
        rig_action_id: DbId,
    ) -> Result<Vec<RigActionConfig>, sqlx::Error> {
        sqlx::query_as::<_, RigActionConfig>(
            "SELECT id, rig_action_id, option_name, valid_values \
             FROM rig_action_configs WHERE rig_action_id = $1 ORDER BY id",
        )
        .bind(rig_action_id)
        .fetch_all(pool)
        .await
    }
}
