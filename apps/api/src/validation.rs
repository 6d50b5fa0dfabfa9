//! Request validation run before any merge or insert.
//!
//! Every check returns `AppError::Validation` with a message naming the
//! offending field. Nothing here touches the database.

use chrono::NaiveDate;

use crate::errors::AppError;

pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("'{field}' must not be blank")));
    }
    Ok(())
}

/// Like [`require_non_blank`] for patch fields: `None` passes.
pub fn non_blank_if_present(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(v) => require_non_blank(field, v),
        None => Ok(()),
    }
}

/// Minimal shape check: one '@' with a non-empty local part and a dotted domain.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    let trimmed = value.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !trimmed.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(AppError::Validation(format!(
            "'email' is not a valid address: '{value}'"
        )));
    }
    Ok(())
}

pub fn validate_price(value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(format!(
            "'price' must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

pub fn validate_url(field: &str, value: &str) -> Result<(), AppError> {
    let lower = value.trim().to_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(AppError::Validation(format!(
            "'{field}' must be an http(s) URL"
        )));
    }
    Ok(())
}

/// An open-ended range (no end date) is always valid.
pub fn validate_date_range(
    start_field: &str,
    start: NaiveDate,
    end_field: &str,
    end: Option<NaiveDate>,
) -> Result<(), AppError> {
    if let Some(end) = end {
        if end < start {
            return Err(AppError::Validation(format!(
                "'{end_field}' ({end}) must not be before '{start_field}' ({start})"
            )));
        }
    }
    Ok(())
}
