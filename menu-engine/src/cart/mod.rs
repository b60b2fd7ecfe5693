//! Cart Store - the persisted order in progress
//!
//! One [`CartLine`] per unit ordered. Adding appends copies of the whole
//! selection once per unit of quantity; removing drops every line of a dish
//! at once. The collection is written back wholesale under [`CART_KEY`].

mod summary;

pub use summary::{CartSummaryLine, summarize};

use shared::models::{CartLine, Dish};
use shared::{AppError, AppResult, ErrorCode};

use crate::money::CartTotals;
use crate::storage::{CART_KEY, LocalStorage, read_json, write_json};

/// Most copies of a selection one "add to cart" accepts
pub const MAX_QUANTITY: u32 = 99;

/// Read the persisted cart; absent or malformed data is an empty cart
pub fn load_cart<S: LocalStorage + ?Sized>(storage: &S) -> AppResult<Vec<CartLine>> {
    Ok(read_json::<Vec<CartLine>, _>(storage, CART_KEY)?.unwrap_or_default())
}

/// Overwrite the persisted cart
pub fn save_cart<S: LocalStorage + ?Sized>(storage: &S, lines: &[CartLine]) -> AppResult<()> {
    write_json(storage, CART_KEY, lines)?;
    Ok(())
}

/// Lines for `quantity` copies of the whole selection
///
/// The selection is repeated as a block: `[a, b]` × 2 gives `[a, b, a, b]`.
/// `quantity` is not bounded here; [`CartStore::add_selection`] checks it.
pub fn expand_selection(selected: &[&Dish], quantity: u32) -> Vec<CartLine> {
    let mut lines = Vec::new();
    for _ in 0..quantity {
        lines.extend(selected.iter().map(|dish| CartLine::from(*dish)));
    }
    lines
}

/// Repository for the cart
///
/// [`add_selection`](Self::add_selection) re-reads storage before appending,
/// but [`remove_item`](Self::remove_item) rewrites the lines loaded with this
/// store: lines another handle wrote since then are overwritten by a removal.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    lines: Vec<CartLine>,
}

impl<S: LocalStorage> CartStore<S> {
    /// Load the cart from storage
    pub fn open(storage: S) -> AppResult<Self> {
        let lines = load_cart(&storage)?;
        tracing::debug!(count = lines.len(), "Cart loaded");
        Ok(Self { storage, lines })
    }

    /// Lines in the order they were added
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (the cart badge)
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Re-read the cart from storage
    pub fn reload(&mut self) -> AppResult<()> {
        self.lines = load_cart(&self.storage)?;
        Ok(())
    }

    /// Overwrite storage with `lines` and adopt them as the in-memory copy
    pub fn save(&mut self, lines: Vec<CartLine>) -> AppResult<()> {
        save_cart(&self.storage, &lines)?;
        self.lines = lines;
        Ok(())
    }

    /// Append `quantity` copies of the selected dishes
    ///
    /// Re-reads the stored cart first so lines written since this store was
    /// opened are kept. Returns the number of lines appended. A quantity
    /// above [`MAX_QUANTITY`] is rejected and nothing is written.
    pub fn add_selection(&mut self, selected: &[&Dish], quantity: u32) -> AppResult<usize> {
        if quantity > MAX_QUANTITY {
            return Err(AppError::new(ErrorCode::InvalidQuantity)
                .with_detail("quantity", quantity)
                .with_detail("max", MAX_QUANTITY));
        }

        let mut lines = load_cart(&self.storage)?;
        let added = expand_selection(selected, quantity);
        let appended = added.len();
        lines.extend(added);

        save_cart(&self.storage, &lines)?;
        self.lines = lines;

        tracing::info!(
            dishes = selected.len(),
            quantity,
            appended,
            count = self.lines.len(),
            "Added to cart"
        );
        Ok(appended)
    }

    /// Remove every line of dish `id`
    ///
    /// Works on the lines loaded with this store. Returns how many lines went
    /// away; zero when the dish was not in the cart.
    pub fn remove_item(&mut self, id: &str) -> AppResult<usize> {
        let lines: Vec<CartLine> = self.lines.iter().filter(|l| l.id != id).cloned().collect();
        let removed = self.lines.len() - lines.len();

        save_cart(&self.storage, &lines)?;
        self.lines = lines;

        tracing::info!(dish_id = %id, removed, count = self.lines.len(), "Removed from cart");
        Ok(removed)
    }

    pub fn totals(&self, include_gst: bool) -> CartTotals {
        CartTotals::compute(&self.lines, include_gst)
    }

    pub fn summary(&self) -> Vec<CartSummaryLine> {
        summarize(&self.lines)
    }
}
