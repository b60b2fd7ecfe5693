//! Unified error codes for the Hotel-Veg menu
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Cart errors
//! - 6xxx: Dish / catalog errors
//! - 9xxx: System and storage errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so the front end can match on them without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Cart ====================
    /// Quantity must be a positive integer
    InvalidQuantity = 4001,
    /// Nothing is selected for "add to cart"
    SelectionEmpty = 4002,

    // ==================== 6xxx: Dish ====================
    /// Dish not found
    DishNotFound = 6001,
    /// Dish price negative or above the menu maximum
    DishInvalidPrice = 6002,
    /// Dish rating outside 1..=5
    DishInvalidRating = 6003,
    /// Category is not one of the menu categories
    CategoryNotFound = 6101,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Local storage backend error
    DatabaseError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::RequiredField => "Please fill all fields",

            // Cart
            ErrorCode::InvalidQuantity => "Quantity must be at least 1",
            ErrorCode::SelectionEmpty => "Select at least one dish",

            // Dish
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DishInvalidPrice => "Dish price is out of range",
            ErrorCode::DishInvalidRating => "Dish rating must be between 1 and 5",
            ErrorCode::CategoryNotFound => "Unknown dish category",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::DatabaseError => "Local storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            7 => Ok(ErrorCode::RequiredField),

            // Cart
            4001 => Ok(ErrorCode::InvalidQuantity),
            4002 => Ok(ErrorCode::SelectionEmpty),

            // Dish
            6001 => Ok(ErrorCode::DishNotFound),
            6002 => Ok(ErrorCode::DishInvalidPrice),
            6003 => Ok(ErrorCode::DishInvalidRating),
            6101 => Ok(ErrorCode::CategoryNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::InvalidQuantity.code(), 4001);
        assert_eq!(ErrorCode::DishNotFound.code(), 6001);
        assert_eq!(ErrorCode::CategoryNotFound.code(), 6101);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::RequiredField.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(4002), Ok(ErrorCode::SelectionEmpty));
        assert_eq!(ErrorCode::try_from(6003), Ok(ErrorCode::DishInvalidRating));
        assert_eq!(ErrorCode::try_from(9002), Ok(ErrorCode::DatabaseError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(3), Err(InvalidErrorCode(3)));
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(1001), Err(InvalidErrorCode(1001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&ErrorCode::RequiredField).unwrap(), "7");
        assert_eq!(serde_json::to_string(&ErrorCode::DishNotFound).unwrap(), "6001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("6101").unwrap();
        assert_eq!(code, ErrorCode::CategoryNotFound);

        let result: Result<ErrorCode, _> = serde_json::from_str("4999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::DishNotFound), "6001");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::RequiredField.message(), "Please fill all fields");
        assert_eq!(ErrorCode::DishNotFound.message(), "Dish not found");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
