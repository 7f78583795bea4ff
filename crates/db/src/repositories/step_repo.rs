//! Ordered step lists for workflows and rigs.
//!
//! `workflow_steps` and `rig_steps` share one implementation, parameterised
//! by a [`StepOwner`] that names the tables and columns involved.
//!
//! Every mutation that reads before it writes (append with auto-assigned
//! order, moves) runs in one transaction holding `FOR UPDATE` on the owner
//! row. Concurrent mutations of the same list are therefore serialized,
//! and `step_order` stays unique per owner.

use std::marker::PhantomData;

use rigflow_core::step_order::{next_step_order, plan_swap, MoveDirection, StepSlot};
use rigflow_core::types::{DbId, StepOrder};
use sqlx::{PgConnection, PgPool};

use crate::models::step::{AppendOutcome, CreateStep, MoveOutcome, Step, StepListing};

/// Binds a step table to its owner table and action catalog.
pub trait StepOwner: Send + Sync + 'static {
    /// Owner name used in error messages (`"Workflow"`, `"RIG"`).
    const ENTITY: &'static str;
    /// Action name used in error messages.
    const ACTION_ENTITY: &'static str;
    const OWNER_TABLE: &'static str;
    const STEP_TABLE: &'static str;
    /// Foreign key column on the step table pointing at the owner.
    const OWNER_COLUMN: &'static str;
    /// Foreign key column on the step table pointing at the action catalog.
    const ACTION_COLUMN: &'static str;
    const ACTION_TABLE: &'static str;
    /// Unique constraint on `(owner, step_order)`.
    const ORDER_CONSTRAINT: &'static str;
}

/// Steps of a workflow, referencing `actions`.
pub struct WorkflowSteps;

impl StepOwner for WorkflowSteps {
    const ENTITY: &'static str = "Workflow";
    const ACTION_ENTITY: &'static str = "Action";
    const OWNER_TABLE: &'static str = "workflows";
    const STEP_TABLE: &'static str = "workflow_steps";
    const OWNER_COLUMN: &'static str = "workflow_id";
    const ACTION_COLUMN: &'static str = "action_id";
    const ACTION_TABLE: &'static str = "actions";
    const ORDER_CONSTRAINT: &'static str = "uq_workflow_steps_workflow_id_step_order";
}

/// Steps of a rig, referencing `rig_actions`.
pub struct RigSteps;

impl StepOwner for RigSteps {
    const ENTITY: &'static str = "RIG";
    const ACTION_ENTITY: &'static str = "RIG Action";
    const OWNER_TABLE: &'static str = "rigs";
    const STEP_TABLE: &'static str = "rig_steps";
    const OWNER_COLUMN: &'static str = "rig_id";
    const ACTION_COLUMN: &'static str = "rig_action_id";
    const ACTION_TABLE: &'static str = "rig_actions";
    const ORDER_CONSTRAINT: &'static str = "uq_rig_steps_rig_id_step_order";
}

/// Ordered-list operations over the steps of owner kind `O`.
pub struct StepRepo<O>(PhantomData<O>);

pub type WorkflowStepRepo = StepRepo<WorkflowSteps>;
pub type RigStepRepo = StepRepo<RigSteps>;

impl<O: StepOwner> StepRepo<O> {
    /// Step columns with the owner/action columns aliased to the generic names.
    fn columns() -> String {
        format!(
            "id, {owner} AS owner_id, {action} AS action_id, selected_value, step_order, \
             created_at, updated_at",
            owner = O::OWNER_COLUMN,
            action = O::ACTION_COLUMN,
        )
    }

    /// Take a row lock on the owner. Returns `false` if it does not exist.
    async fn lock_owner(conn: &mut PgConnection, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", O::OWNER_TABLE);
        let row: Option<(DbId,)> = sqlx::query_as(&query)
            .bind(owner_id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.is_some())
    }

    pub async fn owner_exists(pool: &PgPool, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", O::OWNER_TABLE);
        let row: (bool,) = sqlx::query_as(&query).bind(owner_id).fetch_one(pool).await?;
        Ok(row.0)
    }

    /// Append a step to the owner's list.
    ///
    /// An explicit `step_order` is used as given and must not already be
    /// taken within this owner. Without one, the step is placed after the
    /// current maximum with a gap of
    /// [`STEP_ORDER_GAP`](rigflow_core::step_order::STEP_ORDER_GAP).
    pub async fn append(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateStep,
    ) -> Result<AppendOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !Self::lock_owner(&mut *tx, owner_id).await? {
            return Ok(AppendOutcome::OwnerNotFound);
        }

        let action_query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", O::ACTION_TABLE);
        let (action_exists,): (bool,) = sqlx::query_as(&action_query)
            .bind(input.action_id)
            .fetch_one(&mut *tx)
            .await?;
        if !action_exists {
            return Ok(AppendOutcome::ActionNotFound);
        }

        let step_order = match input.step_order {
            Some(order) => {
                let taken_query = format!(
                    "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1 AND step_order = $2)",
                    O::STEP_TABLE,
                    O::OWNER_COLUMN,
                );
                let (taken,): (bool,) = sqlx::query_as(&taken_query)
                    .bind(owner_id)
                    .bind(order)
                    .fetch_one(&mut *tx)
                    .await?;
                if taken {
                    return Ok(AppendOutcome::DuplicateOrder(order));
                }
                order
            }
            None => {
                let max_query = format!(
                    "SELECT MAX(step_order) FROM {} WHERE {} = $1",
                    O::STEP_TABLE,
                    O::OWNER_COLUMN,
                );
                let (current_max,): (Option<StepOrder>,) = sqlx::query_as(&max_query)
                    .bind(owner_id)
                    .fetch_one(&mut *tx)
                    .await?;
                match next_step_order(current_max) {
                    Ok(order) => order,
                    Err(e) => return Ok(AppendOutcome::Refused(e)),
                }
            }
        };

        let insert = format!(
            "INSERT INTO {table} ({owner}, {action}, selected_value, step_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {columns}",
            table = O::STEP_TABLE,
            owner = O::OWNER_COLUMN,
            action = O::ACTION_COLUMN,
            columns = Self::columns(),
        );
        let step = sqlx::query_as::<_, Step>(&insert)
            .bind(owner_id)
            .bind(input.action_id)
            .bind(&input.selected_value)
            .bind(step_order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(AppendOutcome::Created(step))
    }

    /// The owner's steps in ascending `step_order`, with action names.
    pub async fn list(pool: &PgPool, owner_id: DbId) -> Result<Vec<StepListing>, sqlx::Error> {
        let query = format!(
            "SELECT s.id AS step_id, s.step_order, s.{action} AS action_id, \
                    a.name AS action, s.selected_value \
             FROM {table} s \
             JOIN {catalog} a ON a.id = s.{action} \
             WHERE s.{owner} = $1 \
             ORDER BY s.step_order ASC, s.id ASC",
            table = O::STEP_TABLE,
            catalog = O::ACTION_TABLE,
            owner = O::OWNER_COLUMN,
            action = O::ACTION_COLUMN,
        );
        sqlx::query_as::<_, StepListing>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Delete one step. Remaining steps keep their orders (gaps are fine).
    ///
    /// Returns `true` if a row was deleted, `false` if not found for this owner.
    pub async fn delete(pool: &PgPool, owner_id: DbId, step_id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE id = $1 AND {} = $2",
            O::STEP_TABLE,
            O::OWNER_COLUMN,
        );
        let result = sqlx::query(&query)
            .bind(step_id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Swap a step with its immediate neighbour in `direction`.
    ///
    /// The neighbour is the step with the greatest order below (Up) or the
    /// least order above (Down) the target's. Lookup, swap, and commit
    /// happen in one transaction under the owner lock. The swap is a
    /// single `UPDATE`, so the deferrable unique constraint only sees the
    /// final state.
    pub async fn move_step(
        pool: &PgPool,
        owner_id: DbId,
        step_id: DbId,
        direction: MoveDirection,
    ) -> Result<MoveOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !Self::lock_owner(&mut *tx, owner_id).await? {
            return Ok(MoveOutcome::OwnerNotFound);
        }

        let target_query = format!(
            "SELECT id, step_order FROM {} WHERE id = $1 AND {} = $2 FOR UPDATE",
            O::STEP_TABLE,
            O::OWNER_COLUMN,
        );
        let target: Option<(DbId, StepOrder)> = sqlx::query_as(&target_query)
            .bind(step_id)
            .bind(owner_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((id, step_order)) = target else {
            return Ok(MoveOutcome::StepNotFound);
        };
        let target = StepSlot {
            step_id: id,
            step_order,
        };

        let neighbor_query = format!(
            "SELECT id, step_order FROM {table} \
             WHERE {owner} = $1 AND step_order {cmp} $2 \
             ORDER BY step_order {sort} \
             LIMIT 1 \
             FOR UPDATE",
            table = O::STEP_TABLE,
            owner = O::OWNER_COLUMN,
            cmp = direction.neighbor_comparison(),
            sort = direction.neighbor_sort(),
        );
        let neighbor: Option<(DbId, StepOrder)> = sqlx::query_as(&neighbor_query)
            .bind(owner_id)
            .bind(target.step_order)
            .fetch_optional(&mut *tx)
            .await?;
        let neighbor = neighbor.map(|(step_id, step_order)| StepSlot {
            step_id,
            step_order,
        });

        let plan = match plan_swap(target, neighbor, direction) {
            Ok(plan) => plan,
            Err(e) => return Ok(MoveOutcome::Refused(e)),
        };

        let swap = format!(
            "UPDATE {table} SET step_order = CASE id \
                 WHEN $1 THEN $2::INTEGER \
                 WHEN $3 THEN $4::INTEGER \
             END \
             WHERE {owner} = $5 AND id IN ($1, $3)",
            table = O::STEP_TABLE,
            owner = O::OWNER_COLUMN,
        );
        sqlx::query(&swap)
            .bind(plan.moved.step_id)
            .bind(plan.moved.step_order)
            .bind(plan.displaced.step_id)
            .bind(plan.displaced.step_order)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            table = O::STEP_TABLE,
            owner_id,
            step_id = plan.moved.step_id,
            new_order = plan.moved.step_order,
            neighbor_id = plan.displaced.step_id,
            direction = direction.label(),
            "Swapped step orders",
        );

        Ok(MoveOutcome::Moved(plan))
    }
}
