//! Category Model

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Filter value that passes every dish through
pub const ALL_FILTER: &str = "All";

/// Menu category a dish can be created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishCategory {
    #[serde(rename = "Spicy")]
    Spicy,
    #[serde(rename = "Jain")]
    Jain,
    #[serde(rename = "Low Oil")]
    LowOil,
    #[serde(rename = "Chef Special")]
    ChefSpecial,
}

impl DishCategory {
    /// All categories in menu order
    pub const ALL: [DishCategory; 4] = [
        DishCategory::Spicy,
        DishCategory::Jain,
        DishCategory::LowOil,
        DishCategory::ChefSpecial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DishCategory::Spicy => "Spicy",
            DishCategory::Jain => "Jain",
            DishCategory::LowOil => "Low Oil",
            DishCategory::ChefSpecial => "Chef Special",
        }
    }
}

impl std::fmt::Display for DishCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the display string
impl FromStr for DishCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::unknown_category(s))
    }
}

/// Category filter of the menu page
///
/// `All` is a filter-only pseudo-category and is never stored on a dish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Keep dishes whose category equals this value exactly
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter label; `"All"` selects everything
    pub fn parse(label: &str) -> Self {
        if label == ALL_FILTER {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_FILTER,
            Self::Only(category) => category,
        }
    }

    /// Whether a stored category string passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<DishCategory> for CategoryFilter {
    fn from(category: DishCategory) -> Self {
        Self::Only(category.as_str().to_string())
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter choices in the order the filter menu shows them
pub fn menu_filters() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(DishCategory::ALL.into_iter().map(CategoryFilter::from))
        .collect()
}
