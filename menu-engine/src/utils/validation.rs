//! Input validation helpers
//!
//! Checks for the admin "add dish" form. A failed check names the field in
//! the error's `field` detail.

use shared::{AppError, ErrorCode};
use std::ops::RangeInclusive;

/// Validate that a required string is non-empty (whitespace does not count).
pub fn validate_required_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    Ok(())
}

/// Validate that a required value was supplied.
pub fn validate_required<T: Copy>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::required_field(field))
}

/// Validate that an integer lies inside `range`, reporting `code` otherwise.
pub fn validate_range(
    value: i64,
    range: RangeInclusive<i64>,
    field: &str,
    code: ErrorCode,
) -> Result<(), AppError> {
    if !range.contains(&value) {
        return Err(AppError::with_message(
            code,
            format!(
                "{field} must be between {} and {}, got {value}",
                range.start(),
                range.end()
            ),
        )
        .with_detail("field", field)
        .with_detail("value", value));
    }
    Ok(())
}

/// Validate that an integer is zero or positive.
pub fn validate_non_negative(value: i64, field: &str, code: ErrorCode) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::with_message(
            code,
            format!("{field} must not be negative, got {value}"),
        )
        .with_detail("field", field)
        .with_detail("value", value));
    }
    Ok(())
}
