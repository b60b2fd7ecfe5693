//! Shared types for the Hotel-Veg menu
//!
//! Data model and error types used by the menu engine and the terminal
//! front end: dishes, cart lines, categories, error codes and [`AppError`].

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
