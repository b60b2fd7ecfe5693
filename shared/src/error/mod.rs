//! Unified error system for the Hotel-Veg menu
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with code, message, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Cart errors
//! - 6xxx: Dish / catalog errors
//! - 9xxx: System and storage errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::DishNotFound);
//!
//! // Create an error with details
//! let err = AppError::required_field("name");
//! assert_eq!(err.code, ErrorCode::RequiredField);
//! assert!(err.details.is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
