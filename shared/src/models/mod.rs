//! Data models
//!
//! Shared between the menu engine and the front end.
//! Field names match the persisted JSON shapes exactly.

pub mod cart;
pub mod category;
pub mod dish;

// Re-exports
pub use cart::*;
pub use category::*;
pub use dish::*;
