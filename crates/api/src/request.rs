//! Request parsing: JSON body extraction and boundary conversions.
//!
//! Clients send weekday names in full ("Monday"); storage and the core use
//! the two-letter symbol. The mapping between the two lives here.

use axum::extract::FromRequest;
use rigflow_core::error::CoreError;
use rigflow_core::validation::{validate_hour, validate_name};
use rigflow_core::weekday::Weekday;
use rigflow_db::models::workflow::CreateWorkflow;
use serde::Deserialize;

use crate::error::AppError;

/// `axum::Json` with rejections reported as JSON `VALIDATION_ERROR`s.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Full English day name for a weekday symbol.
pub fn weekday_full_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mo => "Monday",
        Weekday::Tu => "Tuesday",
        Weekday::We => "Wednesday",
        Weekday::Th => "Thursday",
        Weekday::Fr => "Friday",
        Weekday::Sa => "Saturday",
        Weekday::Su => "Sunday",
    }
}

/// Parse a weekday given either as a full name (case-insensitive) or as
/// its symbol (`"MO"`).
pub fn parse_weekday(field: &str, input: &str) -> Result<Weekday, CoreError> {
    let trimmed = input.trim();
    Weekday::ALL
        .into_iter()
        .find(|day| {
            weekday_full_name(*day).eq_ignore_ascii_case(trimmed) || day.as_str() == trimmed
        })
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid {field} '{input}'. Must be a weekday name such as 'Monday'"
            ))
        })
}

/// Body of `POST /workflows`.
#[derive(Debug, Deserialize)]
pub struct CreateWorkflowRequest {
    pub name: String,
    pub start_hour: i32,
    pub end_hour: i32,
    pub start_day: String,
    pub end_day: String,
}

impl CreateWorkflowRequest {
    /// Validate every field and convert days to their symbols.
    pub fn into_create(self) -> Result<CreateWorkflow, CoreError> {
        validate_name("Workflow", &self.name)?;
        validate_hour("start_hour", self.start_hour)?;
        validate_hour("end_hour", self.end_hour)?;
        let start_day = parse_weekday("start_day", &self.start_day)?;
        let end_day = parse_weekday("end_day", &self.end_day)?;

        Ok(CreateWorkflow {
            name: self.name.trim().to_string(),
            start_hour: self.start_hour,
            end_hour: self.end_hour,
            start_day,
            end_day,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start_day: &str, end_day: &str) -> CreateWorkflowRequest {
        CreateWorkflowRequest {
            name: "Nightly".to_string(),
            start_hour: 22,
            end_hour: 6,
            start_day: start_day.to_string(),
            end_day: end_day.to_string(),
        }
    }

    #[test]
    fn full_names_map_to_symbols() {
        assert_eq!(parse_weekday("start_day", "Monday").unwrap(), Weekday::Mo);
        assert_eq!(parse_weekday("start_day", "sunday").unwrap(), Weekday::Su);
        assert_eq!(parse_weekday("start_day", "WEDNESDAY").unwrap(), Weekday::We);
    }

    #[test]
    fn symbols_are_accepted() {
        assert_eq!(parse_weekday("end_day", "FR").unwrap(), Weekday::Fr);
    }

    #[test]
    fn unknown_day_is_rejected() {
        let err = parse_weekday("start_day", "Funday").unwrap_err();
        assert!(err.to_string().contains("Invalid start_day 'Funday'"));
    }

    #[test]
    fn full_name_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(parse_weekday("d", weekday_full_name(day)).unwrap(), day);
        }
    }

    #[test]
    fn into_create_parses_days() {
        let create = request("Friday", "Saturday").into_create().unwrap();
        assert_eq!(create.start_day, Weekday::Fr);
        assert_eq!(create.end_day, Weekday::Sa);
        assert_eq!(create.start_hour, 22);
    }

    #[test]
    fn into_create_rejects_bad_hour() {
        let mut req = request("Monday", "Monday");
        req.end_hour = 24;
        assert!(req.into_create().is_err());
    }
}
