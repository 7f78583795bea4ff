pub mod catalog;
pub mod error;
pub mod step_order;
pub mod types;
pub mod validation;
pub mod weekday;
