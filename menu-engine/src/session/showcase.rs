//! Showcase panel - the large preview next to the dish list

use serde::Serialize;
use shared::models::{Dish, MAX_RATING};

/// Shown while no dish is picked
pub const BRANDING_NAME: &str = "HOTEL BRANDING";
pub const BRANDING_DESCRIPTION: &str = "Welcome to Hotel-Veg";
pub const BRANDING_GIF: &str = "/gifs/hotel-branding.gif";

/// What the preview panel displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Showcase {
    pub name: String,
    pub description: String,
    pub gif: String,
    /// `None` for the branding panel
    pub rating: Option<i32>,
}

impl Showcase {
    pub fn branding() -> Self {
        Self {
            name: BRANDING_NAME.to_string(),
            description: BRANDING_DESCRIPTION.to_string(),
            gif: BRANDING_GIF.to_string(),
            rating: None,
        }
    }

    pub fn for_dish(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            description: dish.description.clone(),
            gif: dish.gif.clone(),
            rating: Some(dish.rating),
        }
    }

    /// Panel for `dish`, or the branding fallback
    pub fn of(dish: Option<&Dish>) -> Self {
        dish.map(Self::for_dish).unwrap_or_else(Self::branding)
    }
}

/// Five-slot star bar, filled up to `rating`
///
/// Out-of-range ratings from stored data are clamped for display.
pub fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_dishes;

    #[test]
    fn test_branding_fallback() {
        let panel = Showcase::of(None);
        assert_eq!(panel.name, "HOTEL BRANDING");
        assert_eq!(panel.description, "Welcome to Hotel-Veg");
        assert_eq!(panel.gif, "/gifs/hotel-branding.gif");
        assert_eq!(panel.rating, None);
    }

    #[test]
    fn test_dish_panel() {
        let dishes = default_dishes();
        let panel = Showcase::of(Some(&dishes[2]));
        assert_eq!(panel.name, "Veg handi");
        assert_eq!(panel.gif, "/gifs/pasta-dish.gif");
        assert_eq!(panel.rating, Some(5));
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(stars(-2), "☆☆☆☆☆");
    }
}
