//! Repository for the `phones` table, including rig assignment.

use rigflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::phone::{AssignOutcome, CreatePhone, Phone, RigPhone};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, rig_id, serial_number, created_at, updated_at";

/// Unique constraint on `phones.serial_number`.
pub const SERIAL_NUMBER_CONSTRAINT: &str = "uq_phones_serial_number";

pub struct PhoneRepo;

impl PhoneRepo {
    /// Register an unassigned phone.
    ///
    /// A duplicate serial number fails with a unique violation on
    /// [`SERIAL_NUMBER_CONSTRAINT`].
    pub async fn create(pool: &PgPool, input: &CreatePhone) -> Result<Phone, sqlx::Error> {
        let query = format!(
            "INSERT INTO phones (serial_number) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Phone>(&query)
            .bind(&input.serial_number)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Phone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM phones WHERE id = $1");
        sqlx::query_as::<_, Phone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Phone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM phones ORDER BY id");
        sqlx::query_as::<_, Phone>(&query).fetch_all(pool).await
    }

    /// Phones currently mounted on a rig.
    pub async fn list_by_rig(pool: &PgPool, rig_id: DbId) -> Result<Vec<RigPhone>, sqlx::Error> {
        sqlx::query_as::<_, RigPhone>(
            "SELECT id, serial_number FROM phones WHERE rig_id = $1 ORDER BY id",
        )
        .bind(rig_id)
        .fetch_all(pool)
        .await
    }

    /// Mount a phone on a rig, moving it off any rig it was on.
    ///
    /// The rig row is held `FOR SHARE` until the update commits, so a
    /// concurrent rig delete cannot slip in between the check and the write.
    pub async fn assign_to_rig(
        pool: &PgPool,
        phone_id: DbId,
        rig_id: DbId,
    ) -> Result<AssignOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let rig: Option<(DbId,)> = sqlx::query_as("SELECT id FROM rigs WHERE id = $1 FOR SHARE")
            .bind(rig_id)
            .fetch_optional(&mut *tx)
            .await?;
        if rig.is_none() {
            return Ok(AssignOutcome::RigNotFound);
        }

        let query = format!(
            "UPDATE phones SET rig_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let phone = sqlx::query_as::<_, Phone>(&query)
            .bind(phone_id)
            .bind(rig_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(phone) = phone else {
            return Ok(AssignOutcome::PhoneNotFound);
        };

        tx.commit().await?;
        Ok(AssignOutcome::Assigned(phone))
    }

    /// Unmount a phone from the given rig.
    ///
    /// Returns `None` if the phone does not exist or is not on that rig.
    pub async fn unassign_from_rig(
        pool: &PgPool,
        rig_id: DbId,
        phone_id: DbId,
    ) -> Result<Option<Phone>, sqlx::Error> {
        let query = format!(
            "UPDATE phones SET rig_id = NULL WHERE id = $1 AND rig_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Phone>(&query)
            .bind(phone_id)
            .bind(rig_id)
            .fetch_optional(pool)
            .await
    }
}
