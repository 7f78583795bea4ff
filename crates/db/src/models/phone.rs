//! Phone entity model and DTOs.

use rigflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `phones` table. `rig_id` is `None` while unassigned.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Phone {
    pub id: DbId,
    pub rig_id: Option<DbId>,
    pub serial_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A phone as listed under its rig.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RigPhone {
    pub id: DbId,
    pub serial_number: String,
}

/// DTO for registering a phone. New phones start unassigned.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhone {
    pub serial_number: String,
}

/// DTO for mounting a phone on a rig.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignPhone {
    pub phone_id: DbId,
}

/// Result of [`PhoneRepo::assign_to_rig`](crate::repositories::PhoneRepo::assign_to_rig).
#[derive(Debug)]
pub enum AssignOutcome {
    Assigned(Phone),
    RigNotFound,
    PhoneNotFound,
}
