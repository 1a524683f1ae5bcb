// Creation-boundary checks for logbook entries.
//
// Purpose
// - Turn raw field values into the canonical shape stored in the logbook.
//
// Responsibilities
// - Reject blank required fields, malformed identifiers, dates and times.
// - Upper-case identifiers, trim free text, re-render date and time canonically.
// - Never re-validate decoded entries: imports are best effort.

use chrono::{NaiveDate, NaiveTime};

use crate::modules::logbook::core::entry::{GeneralEvent, ShiftChange};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("identifier must be 3 to 4 letters, got {0:?}")]
    InvalidIdentifier(String),

    #[error("date must be YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),

    #[error("time must be HH:MM, got {0:?}")]
    InvalidTime(String),

    #[error("{field} must fit on a single line")]
    LineBreak { field: &'static str },
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn canonical_date(value: &str) -> Result<String, DecideError> {
    if value.trim().is_empty() {
        return Err(DecideError::MissingField { field: "date" });
    }
    parse_date(value)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .ok_or_else(|| DecideError::InvalidDate(value.to_string()))
}

pub fn canonical_time(value: &str) -> Result<String, DecideError> {
    if value.trim().is_empty() {
        return Err(DecideError::MissingField { field: "time" });
    }
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map(|time| time.format(TIME_FORMAT).to_string())
        .map_err(|_| DecideError::InvalidTime(value.to_string()))
}

pub fn canonical_identifier(value: &str) -> Result<String, DecideError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DecideError::MissingField { field: "identifier" });
    }
    let letters = trimmed.chars().count();
    if !(3..=4).contains(&letters) || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DecideError::InvalidIdentifier(value.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn single_line(field: &'static str, value: &str) -> Result<String, DecideError> {
    if value.contains(['\n', '\r']) {
        return Err(DecideError::LineBreak { field });
    }
    Ok(value.trim().to_string())
}

fn required_text(field: &'static str, value: &str) -> Result<String, DecideError> {
    let text = single_line(field, value)?;
    if text.is_empty() {
        return Err(DecideError::MissingField { field });
    }
    Ok(text)
}

/// Blank operator names are treated as absent.
pub fn optional_text(field: &'static str, value: Option<&str>) -> Result<Option<String>, DecideError> {
    match value {
        Some(text) => single_line(field, text).map(|text| Some(text).filter(|t| !t.is_empty())),
        None => Ok(None),
    }
}

pub fn validate_general_event(
    identifier: &str,
    description: &str,
    informed_to: &str,
    employee_name: Option<&str>,
) -> Result<GeneralEvent, DecideError> {
    Ok(GeneralEvent {
        identifier: canonical_identifier(identifier)?,
        description: required_text("description", description)?,
        informed_to: required_text("informed_to", informed_to)?,
        employee_name: optional_text("employee_name", employee_name)?,
    })
}

pub fn validate_shift_change(employee_name: &str) -> Result<ShiftChange, DecideError> {
    Ok(ShiftChange {
        employee_name: required_text("employee_name", employee_name)?,
    })
}
