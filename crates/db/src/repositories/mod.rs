//! Repository layer: one unit struct per table, each taking `&PgPool`.

pub mod action_repo;
pub mod phone_repo;
pub mod rig_action_repo;
pub mod rig_repo;
pub mod step_repo;
pub mod workflow_repo;

pub use action_repo::ActionRepo;
pub use phone_repo::PhoneRepo;
pub use rig_action_repo::RigActionRepo;
pub use rig_repo::RigRepo;
pub use step_repo::{RigStepRepo, RigSteps, StepOwner, StepRepo, WorkflowStepRepo, WorkflowSteps};
pub use workflow_repo::WorkflowRepo;
