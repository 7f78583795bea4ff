//! Field validation for workflow, rig, and phone payloads.

use crate::error::CoreError;

/// Maximum length of a workflow or rig name (matches `VARCHAR(100)`).
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a rig description (matches `VARCHAR(255)`).
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Maximum length of a phone serial number (matches `VARCHAR(50)`).
pub const MAX_SERIAL_NUMBER_LEN: usize = 50;

/// Latest valid hour of a schedule window.
pub const MAX_HOUR: i32 = 23;

/// Validate an entity name: non-blank and within length limit.
pub fn validate_name(entity: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{entity} name too long: {} chars (max {MAX_NAME_LEN})",
            name.chars().count()
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description too long: {} chars (max {MAX_DESCRIPTION_LEN})",
            description.chars().count()
        )));
    }
    Ok(())
}

/// Validate a phone serial number: non-blank, no surrounding whitespace,
/// within length limit.
pub fn validate_serial_number(serial: &str) -> Result<(), CoreError> {
    if serial.trim().is_empty() {
        return Err(CoreError::Validation(
            "serial_number is required".to_string(),
        ));
    }
    if serial.trim() != serial {
        return Err(CoreError::Validation(
            "serial_number must not have leading or trailing whitespace".to_string(),
        ));
    }
    if serial.chars().count() > MAX_SERIAL_NUMBER_LEN {
        return Err(CoreError::Validation(format!(
            "serial_number too long: {} chars (max {MAX_SERIAL_NUMBER_LEN})",
            serial.chars().count()
        )));
    }
    Ok(())
}

/// Validate an hour-of-day field (`0..=23`).
pub fn validate_hour(field: &str, hour: i32) -> Result<(), CoreError> {
    if !(0..=MAX_HOUR).contains(&hour) {
        return Err(CoreError::Validation(format!(
            "{field} must be between 0 and {MAX_HOUR}, got {hour}"
        )));
    }
    Ok(())
}
