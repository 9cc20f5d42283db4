use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{EventChanges, NewEvent};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields (name, date, location) are required")]
    MissingField,
    #[error("Date must be in YYYY-MM-DD format")]
    BadDateFormat,
}

/// Accepts only `YYYY-MM-DD` with zero-padded parts that name a real day.
pub fn validate_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(ValidationError::BadDateFormat);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::BadDateFormat)
}

fn required(field: Option<String>) -> Result<String, ValidationError> {
    field
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField)
}

pub fn validate_new_event(
    name: Option<String>,
    date: Option<String>,
    location: Option<String>,
) -> Result<NewEvent, ValidationError> {
    let name = required(name)?;
    let date = required(date)?;
    let location = required(location)?;
    validate_date(&date)?;
    Ok(NewEvent {
        name,
        date,
        location,
    })
}

pub fn validate_changes(
    name: Option<String>,
    date: Option<String>,
    location: Option<String>,
) -> Result<EventChanges, ValidationError> {
    if let Some(date) = &date {
        validate_date(date)?;
    }
    // stored rows never carry an empty name or location
    if name.as_deref() == Some("") || location.as_deref() == Some("") {
        return Err(ValidationError::MissingField);
    }
    Ok(EventChanges {
        name,
        date,
        location,
    })
}
