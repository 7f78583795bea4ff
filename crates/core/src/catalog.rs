//! Closed type tags for the action catalogs.
//!
//! Workflow actions drive a single phone; rig actions sequence phones and
//! workflows on a rig. Both catalogs are seeded by migration and read-only
//! at runtime.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ACTION_CLICK: &str = "click";
pub const ACTION_TYPE_INPUT: &str = "type_input";
pub const ACTION_SWIPE: &str = "swipe";
pub const ACTION_SWIPE_UNTIL: &str = "swipe_until";
pub const ACTION_SET_TIME_DELAY: &str = "set_time_delay";

pub const VALID_ACTION_TYPES: &[&str] = &[
    ACTION_CLICK,
    ACTION_TYPE_INPUT,
    ACTION_SWIPE,
    ACTION_SWIPE_UNTIL,
    ACTION_SET_TIME_DELAY,
];

pub const RIG_ACTION_SWITCH_PHONE: &str = "switch_phone";
pub const RIG_ACTION_SET_TIME_DELAY: &str = "set_time_delay";
pub const RIG_ACTION_ADD_WORKFLOW: &str = "add_workflow";

pub const VALID_RIG_ACTION_TYPES: &[&str] = &[
    RIG_ACTION_SWITCH_PHONE,
    RIG_ACTION_SET_TIME_DELAY,
    RIG_ACTION_ADD_WORKFLOW,
];

/// Type tag of a workflow action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Click,
    TypeInput,
    Swipe,
    SwipeUntil,
    SetTimeDelay,
}

impl ActionType {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            ACTION_CLICK => Ok(Self::Click),
            ACTION_TYPE_INPUT => Ok(Self::TypeInput),
            ACTION_SWIPE => Ok(Self::Swipe),
            ACTION_SWIPE_UNTIL => Ok(Self::SwipeUntil),
            ACTION_SET_TIME_DELAY => Ok(Self::SetTimeDelay),
            _ => Err(CoreError::Validation(format!(
                "Invalid action type '{s}'. Must be one of: {}",
                VALID_ACTION_TYPES.join(", ")
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => ACTION_CLICK,
            Self::TypeInput => ACTION_TYPE_INPUT,
            Self::Swipe => ACTION_SWIPE,
            Self::SwipeUntil => ACTION_SWIPE_UNTIL,
            Self::SetTimeDelay => ACTION_SET_TIME_DELAY,
        }
    }
}

impl TryFrom<String> for ActionType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

/// Type tag of a rig action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RigActionType {
    SwitchPhone,
    SetTimeDelay,
    AddWorkflow,
}

impl RigActionType {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            RIG_ACTION_SWITCH_PHONE => Ok(Self::SwitchPhone),
            RIG_ACTION_SET_TIME_DELAY => Ok(Self::SetTimeDelay),
            RIG_ACTION_ADD_WORKFLOW => Ok(Self::AddWorkflow),
            _ => Err(CoreError::Validation(format!(
                "Invalid rig action type '{s}'. Must be one of: {}",
                VALID_RIG_ACTION_TYPES.join(", ")
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SwitchPhone => RIG_ACTION_SWITCH_PHONE,
            Self::SetTimeDelay => RIG_ACTION_SET_TIME_DELAY,
            Self::AddWorkflow => RIG_ACTION_ADD_WORKFLOW,
        }
    }
}

impl TryFrom<String> for RigActionType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}
