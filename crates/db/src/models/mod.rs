pub mod action;
pub mod phone;
pub mod rig;
pub mod rig_action;
pub mod step;
pub mod workflow;
