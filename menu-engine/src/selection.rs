//! Selection set - dishes ticked for the next "add to cart"
//!
//! Lives for one page view only. Ids are kept even when the dish drops out
//! of the filtered view or out of the catalog; resolution against the
//! catalog happens when the selection is used.

use shared::models::Dish;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present
    ///
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids, sorted for stable display
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Selected dishes in catalog order
    ///
    /// Ids with no matching dish are skipped.
    pub fn selected_dishes<'a>(&self, dishes: &'a [Dish]) -> Vec<&'a Dish> {
        dishes.iter().filter(|d| self.ids.contains(&d.id)).collect()
    }
}
