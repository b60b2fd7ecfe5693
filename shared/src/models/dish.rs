//! Dish Model

use serde::{Deserialize, Serialize};

/// Image used when the admin form has no uploaded picture
pub const DEFAULT_DISH_IMAGE: &str = "/images/matar-paneer.webp";
/// Animated preview used when the admin form has no uploaded GIF
pub const DEFAULT_DISH_GIF: &str = "/gifs/pasta-dish.gif";

/// Highest price a dish can be created with (₹10,00,000)
///
/// Keeps every cart sum far inside `i64`.
pub const MAX_DISH_PRICE: i64 = 1_000_000;

/// Lowest and highest star rating
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Dish entity
///
/// Persisted as-is under the catalog key. `category` stays a plain string so
/// that loaded data with categories outside [`DishCategory`](super::DishCategory)
/// survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Creation timestamp in milliseconds, as a string
    pub id: String,
    pub name: String,
    pub category: String,
    /// Price in the smallest currency unit
    pub price: i64,
    pub description: String,
    /// Star rating, 1-5
    pub rating: i32,
    /// Image URI or local path
    pub image: String,
    /// Animated preview URI or local path
    pub gif: String,
}

/// Create dish payload (the admin form)
///
/// Every field mirrors a form input, so "missing" is an empty string, a
/// `None` price or a zero rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub category: String,
    pub price: Option<i64>,
    pub description: String,
    pub rating: i32,
    /// Uploaded picture reference, if any
    pub image: Option<String>,
    /// Uploaded GIF reference, if any
    pub gif: Option<String>,
}
