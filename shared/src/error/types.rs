//! Application error type

use super::{ErrorCategory, codes::ErrorCode};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error type every menu operation reports to the caller:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages (shown to the user as-is)
/// - Optional structured details, e.g. the offending form field
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    // ==================== Convenience constructors ====================

    /// A required form field was left empty
    pub fn required_field(field: impl Into<String>) -> Self {
        Self::new(ErrorCode::RequiredField).with_detail("field", field.into())
    }

    /// Create a dish not found error
    pub fn dish_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::DishNotFound, format!("Dish {} not found", id))
            .with_detail("id", id)
    }

    /// Create an unknown category error
    pub fn unknown_category(value: impl Into<String>) -> Self {
        let v = value.into();
        Self::with_message(
            ErrorCode::CategoryNotFound,
            format!("Unknown dish category: {}", v),
        )
        .with_detail("field", "category")
        .with_detail("value", v)
    }

    /// Create a storage backend error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

/// Result type for menu operations
pub type AppResult<T> = Result<T, AppError>;
