use crate::step_order::Boundary;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Step is already at the {boundary}")]
    AlreadyAtBoundary { boundary: Boundary },

    #[error("Internal error: {0}")]
    Internal(String),
}
