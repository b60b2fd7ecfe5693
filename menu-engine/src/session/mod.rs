//! Menu Session - ephemeral state of one menu page view
//!
//! Search term, category filter, selection, quantity, the dish in the
//! showcase panel and the open/closed state of the page's popups. Nothing
//! here is persisted; a new page view starts from [`MenuSession::new`].

mod showcase;

pub use showcase::{BRANDING_DESCRIPTION, BRANDING_GIF, BRANDING_NAME, Showcase, stars};

use shared::models::{CategoryFilter, Dish};
use shared::{AppError, AppResult, ErrorCode};

use crate::cart::{CartStore, MAX_QUANTITY};
use crate::selection::SelectionSet;
use crate::storage::LocalStorage;
use crate::view::view;

/// Open/closed state of a popup or dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
}

impl WidgetState {
    pub fn toggle(&mut self) {
        *self = match self {
            WidgetState::Closed => WidgetState::Open,
            WidgetState::Open => WidgetState::Closed,
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, WidgetState::Open)
    }
}

/// Popups and dropdowns of the menu page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Widgets {
    pub search_popup: WidgetState,
    pub filter_menu: WidgetState,
    pub admin_login: WidgetState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSession {
    search_term: String,
    filter: CategoryFilter,
    selection: SelectionSet,
    quantity: u32,
    shown_dish: Option<String>,
    pub widgets: Widgets,
}

impl Default for MenuSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuSession {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            filter: CategoryFilter::All,
            selection: SelectionSet::new(),
            quantity: 1,
            shown_dish: None,
            widgets: Widgets::default(),
        }
    }

    // ========== Search & filter ==========

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Pick a filter; the filter menu closes
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.widgets.filter_menu = WidgetState::Closed;
    }

    /// The dishes the page currently lists
    pub fn visible<'a>(&self, dishes: &'a [Dish]) -> Vec<&'a Dish> {
        view(dishes, &self.search_term, &self.filter)
    }

    // ========== Selection & quantity ==========

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Tick or untick a dish; returns whether it is ticked afterwards
    pub fn toggle(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Accepts 1 through [`MAX_QUANTITY`]
    pub fn set_quantity(&mut self, quantity: u32) -> AppResult<()> {
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return Err(AppError::new(ErrorCode::InvalidQuantity)
                .with_detail("quantity", quantity)
                .with_detail("max", MAX_QUANTITY));
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Stops at [`MAX_QUANTITY`]
    pub fn increment_quantity(&mut self) {
        self.quantity = (self.quantity + 1).min(MAX_QUANTITY);
    }

    /// Never goes below 1
    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    /// Add the selection to the cart, `quantity` times over
    ///
    /// Ids that no longer match a dish are skipped. Afterwards the selection
    /// is cleared and quantity goes back to 1. Returns the number of lines
    /// appended.
    pub fn add_to_cart<S: LocalStorage>(
        &mut self,
        dishes: &[Dish],
        cart: &mut CartStore<S>,
    ) -> AppResult<usize> {
        if self.selection.is_empty() {
            return Err(AppError::new(ErrorCode::SelectionEmpty));
        }

        let selected = self.selection.selected_dishes(dishes);
        if selected.len() < self.selection.len() {
            tracing::debug!(
                selected = self.selection.len(),
                resolved = selected.len(),
                "Some selected dishes are no longer on the menu"
            );
        }

        let appended = cart.add_selection(&selected, self.quantity)?;
        self.selection.clear();
        self.quantity = 1;
        Ok(appended)
    }

    // ========== Showcase ==========

    /// Put a dish in the showcase panel
    pub fn show_dish(&mut self, dishes: &[Dish], id: &str) -> AppResult<()> {
        if !dishes.iter().any(|d| d.id == id) {
            return Err(AppError::dish_not_found(id));
        }
        self.shown_dish = Some(id.to_string());
        Ok(())
    }

    /// Showcase panel; falls back to branding if the shown dish is gone
    pub fn showcase(&self, dishes: &[Dish]) -> Showcase {
        let dish = self
            .shown_dish
            .as_deref()
            .and_then(|id| dishes.iter().find(|d| d.id == id));
        Showcase::of(dish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_dishes;
    use crate::storage::RedbStorage;
    use shared::models::DishCategory;

    fn open_cart() -> CartStore<RedbStorage> {
        CartStore::open(RedbStorage::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = MenuSession::new();
        assert_eq!(session.quantity(), 1);
        assert_eq!(session.filter(), &CategoryFilter::All);
        assert!(session.selection().is_empty());
        assert!(!session.widgets.search_popup.is_open());
    }

    #[test]
    fn test_visible_follows_search_and_filter() {
        let dishes = default_dishes();
        let mut session = MenuSession::new();
        session.set_search("paneer");
        assert_eq!(session.visible(&dishes).len(), 2);
        session.set_filter(DishCategory::ChefSpecial.into());
        let visible = session.visible(&dishes);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Paneer Sultani");
    }

    #[test]
    fn test_set_filter_closes_filter_menu() {
        let mut session = MenuSession::new();
        session.widgets.filter_menu.toggle();
        assert!(session.widgets.filter_menu.is_open());
        session.set_filter(CategoryFilter::parse("Jain"));
        assert!(!session.widgets.filter_menu.is_open());
    }

    #[test]
    fn test_selection_survives_filter_change() {
        let dishes = default_dishes();
        let mut session = MenuSession::new();
        session.toggle("1");
        session.set_filter(DishCategory::LowOil.into());
        assert!(session.visible(&dishes).iter().all(|d| d.id != "1"));
        assert!(session.selection().contains("1"));
    }

    #[test]
    fn test_quantity_bounds() {
        let mut session = MenuSession::new();
        session.decrement_quantity();
        assert_eq!(session.quantity(), 1);
        session.increment_quantity();
        session.increment_quantity();
        assert_eq!(session.quantity(), 3);
        let err = session.set_quantity(0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(session.quantity(), 3);
    }

    #[test]
    fn test_quantity_upper_bound() {
        let mut session = MenuSession::new();
        let err = session.set_quantity(4_000_000_000).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(session.quantity(), 1);

        session.set_quantity(MAX_QUANTITY).unwrap();
        session.increment_quantity();
        assert_eq!(session.quantity(), MAX_QUANTITY);
    }

    #[test]
    fn test_add_to_cart_multiplies_selection_and_resets() {
        let dishes = default_dishes();
        let mut cart = open_cart();
        let mut session = MenuSession::new();
        session.toggle("2");
        session.toggle("4");
        session.set_quantity(3).unwrap();

        assert_eq!(session.add_to_cart(&dishes, &mut cart).unwrap(), 6);
        assert_eq!(cart.count(), 6);
        assert!(session.selection().is_empty());
        assert_eq!(session.quantity(), 1);
    }

    #[test]
    fn test_add_to_cart_requires_selection() {
        let dishes = default_dishes();
        let mut cart = open_cart();
        let mut session = MenuSession::new();
        let err = session.add_to_cart(&dishes, &mut cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::SelectionEmpty);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_to_cart_skips_orphaned_ids() {
        let mut dishes = default_dishes();
        let mut cart = open_cart();
        let mut session = MenuSession::new();
        session.toggle("1");
        session.toggle("5");
        dishes.retain(|d| d.id != "5");

        assert_eq!(session.add_to_cart(&dishes, &mut cart).unwrap(), 1);
        assert_eq!(cart.lines()[0].id, "1");
    }

    #[test]
    fn test_showcase() {
        let mut dishes = default_dishes();
        let mut session = MenuSession::new();
        assert_eq!(session.showcase(&dishes), Showcase::branding());

        session.show_dish(&dishes, "4").unwrap();
        assert_eq!(session.showcase(&dishes).name, "Mater Paneer");

        let err = session.show_dish(&dishes, "404").unwrap_err();
        assert_eq!(err.code, ErrorCode::DishNotFound);

        dishes.retain(|d| d.id != "4");
        assert_eq!(session.showcase(&dishes), Showcase::branding());
    }
}
