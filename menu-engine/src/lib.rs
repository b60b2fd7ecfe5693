//! Hotel-Veg menu engine
//!
//! Restaurant menu state persisted in a local key-value store: the dish
//! catalog, a derived search/filter view, the per-page selection, the cart
//! and its GST totals.
//!
//! # Layout
//!
//! ```text
//! menu-engine/src/
//! ├── core/          # config and state
//! ├── storage.rs     # redb local storage
//! ├── catalog/       # dish catalog
//! ├── view.rs        # search + category filter
//! ├── selection.rs   # selection set
//! ├── cart/          # cart store
//! ├── money.rs       # subtotal / GST / total
//! ├── session/       # per-page session state
//! └── utils/         # logging, validation
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod money;
pub mod selection;
pub mod session;
pub mod storage;
pub mod utils;
pub mod view;

// Re-export public types
pub use cart::{CartStore, CartSummaryLine};
pub use catalog::{CatalogStore, default_dishes};
pub use core::{Config, MenuState};
pub use money::{CartTotals, GST_RATE, format_price};
pub use selection::SelectionSet;
pub use session::{MenuSession, Showcase, WidgetState};
pub use storage::{CART_KEY, CATALOG_KEY, LocalStorage, RedbStorage, StorageError};
pub use view::view;

pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
