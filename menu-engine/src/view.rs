//! Derived view - search and category filtering of the catalog
//!
//! Recomputed from scratch whenever the catalog, the search term or the
//! filter changes. Never stored.

use shared::models::{CategoryFilter, Dish};

/// Case-insensitive substring match on the dish name; empty term matches all
pub fn matches_search(dish: &Dish, search_term: &str) -> bool {
    search_term.is_empty()
        || dish
            .name
            .to_lowercase()
            .contains(&search_term.to_lowercase())
}

/// Dishes passing both the search term and the category filter
///
/// A stable filter: the result keeps the catalog order.
pub fn view<'a>(dishes: &'a [Dish], search_term: &str, filter: &CategoryFilter) -> Vec<&'a Dish> {
    dishes
        .iter()
        .filter(|dish| matches_search(dish, search_term) && filter.matches(&dish.category))
        .collect()
}
