//! Weekday symbols used by workflow schedule windows.
//!
//! The two-letter symbol (`MO` .. `SU`) is the canonical form, both in the
//! database and in this enum. Translating full day names is left to the
//! request layer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All valid weekday symbols, Monday first.
pub const VALID_WEEKDAY_SYMBOLS: &[&str] = &["MO", "TU", "WE", "TH", "FR", "SA", "SU"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
    Su,
}

impl Weekday {
    /// Every weekday, Monday first.
    pub const ALL: [Weekday; 7] = [
        Self::Mo,
        Self::Tu,
        Self::We,
        Self::Th,
        Self::Fr,
        Self::Sa,
        Self::Su,
    ];

    /// Convert from a stored symbol such as `"MO"`.
    pub fn from_symbol(s: &str) -> Result<Self, CoreError> {
        match s {
            "MO" => Ok(Self::Mo),
            "TU" => Ok(Self::Tu),
            "WE" => Ok(Self::We),
            "TH" => Ok(Self::Th),
            "FR" => Ok(Self::Fr),
            "SA" => Ok(Self::Sa),
            "SU" => Ok(Self::Su),
            _ => Err(CoreError::Validation(format!(
                "Invalid weekday '{s}'. Must be one of: {}",
                VALID_WEEKDAY_SYMBOLS.join(", ")
            ))),
        }
    }

    /// The database symbol.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mo => "MO",
            Self::Tu => "TU",
            Self::We => "WE",
            Self::Th => "TH",
            Self::Fr => "FR",
            Self::Sa => "SA",
            Self::Su => "SU",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Weekday {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_symbol(&value)
    }
}
