//! Catalog Store - the persisted dish list
//!
//! Owns the in-memory copy of the catalog and writes it back wholesale under
//! [`CATALOG_KEY`] after every change. Dishes are only ever added or removed;
//! there is no in-place edit.

mod defaults;

pub use defaults::default_dishes;

use shared::models::{DEFAULT_DISH_GIF, DEFAULT_DISH_IMAGE, Dish, DishCategory, DishCreate};
use shared::models::{MAX_DISH_PRICE, MAX_RATING, MIN_RATING};
use shared::util::{now_millis, timestamp_id};
use shared::{AppError, AppResult, ErrorCode};

use crate::storage::{CATALOG_KEY, LocalStorage, read_json, write_json};
use crate::utils::validation::{
    validate_non_negative, validate_range, validate_required, validate_required_text,
};

/// Read the persisted catalog
///
/// Falls back to [`default_dishes`] when nothing was saved or the stored
/// value cannot be decoded.
pub fn load_catalog<S: LocalStorage + ?Sized>(storage: &S) -> AppResult<Vec<Dish>> {
    match read_json::<Vec<Dish>, _>(storage, CATALOG_KEY)? {
        Some(dishes) => Ok(dishes),
        None => {
            tracing::debug!("No saved catalog, using default dishes");
            Ok(default_dishes())
        }
    }
}

/// Overwrite the persisted catalog
pub fn save_catalog<S: LocalStorage + ?Sized>(storage: &S, dishes: &[Dish]) -> AppResult<()> {
    write_json(storage, CATALOG_KEY, dishes)?;
    Ok(())
}

/// Validate the admin form and build the dish it describes
///
/// Required fields are checked in form order (name, category, price,
/// description, rating); a zero rating counts as missing. The id comes from
/// `now` and is bumped past any id already in `existing`.
pub fn build_dish(input: DishCreate, now: i64, existing: &[Dish]) -> AppResult<Dish> {
    validate_required_text(&input.name, "name")?;
    validate_required_text(&input.category, "category")?;
    let price = validate_required(input.price, "price")?;
    validate_required_text(&input.description, "description")?;
    if input.rating == 0 {
        return Err(AppError::required_field("rating"));
    }

    let category: DishCategory = input.category.parse()?;
    validate_non_negative(price, "price", ErrorCode::DishInvalidPrice)?;
    validate_range(price, 0..=MAX_DISH_PRICE, "price", ErrorCode::DishInvalidPrice)?;
    validate_range(
        i64::from(input.rating),
        i64::from(MIN_RATING)..=i64::from(MAX_RATING),
        "rating",
        ErrorCode::DishInvalidRating,
    )?;

    let id = timestamp_id(now, |candidate| existing.iter().any(|d| d.id == candidate));

    Ok(Dish {
        id,
        name: input.name,
        category: category.as_str().to_string(),
        price,
        description: input.description,
        rating: input.rating,
        image: uploaded_or(input.image, DEFAULT_DISH_IMAGE),
        gif: uploaded_or(input.gif, DEFAULT_DISH_GIF),
    })
}

fn uploaded_or(upload: Option<String>, default: &str) -> String {
    upload
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Catalog with `dish` appended
pub fn add_dish(dishes: &[Dish], dish: Dish) -> Vec<Dish> {
    let mut updated = dishes.to_vec();
    updated.push(dish);
    updated
}

/// Catalog without any dish whose id is `id`
pub fn remove_dish(dishes: &[Dish], id: &str) -> Vec<Dish> {
    dishes.iter().filter(|d| d.id != id).cloned().collect()
}

/// Repository for the dish catalog
///
/// The in-memory list is only replaced after the write to storage succeeded,
/// so a failed save leaves it untouched.
#[derive(Debug)]
pub struct CatalogStore<S> {
    storage: S,
    dishes: Vec<Dish>,
}

impl<S: LocalStorage> CatalogStore<S> {
    /// Load the catalog from storage
    pub fn open(storage: S) -> AppResult<Self> {
        let dishes = load_catalog(&storage)?;
        tracing::debug!(count = dishes.len(), "Catalog loaded");
        Ok(Self { storage, dishes })
    }

    /// Current dishes, in catalog order
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    /// Like [`get`](Self::get) but reports a missing dish as an error
    pub fn require(&self, id: &str) -> AppResult<&Dish> {
        self.get(id).ok_or_else(|| AppError::dish_not_found(id))
    }

    /// Re-read the catalog from storage, discarding the in-memory copy
    pub fn reload(&mut self) -> AppResult<()> {
        self.dishes = load_catalog(&self.storage)?;
        Ok(())
    }

    /// Overwrite storage with `dishes` and adopt them as the in-memory copy
    pub fn save(&mut self, dishes: Vec<Dish>) -> AppResult<()> {
        save_catalog(&self.storage, &dishes)?;
        self.dishes = dishes;
        Ok(())
    }

    /// Validate the form input and append the new dish
    ///
    /// On a validation error nothing is written.
    pub fn add(&mut self, input: DishCreate) -> AppResult<Dish> {
        let dish = build_dish(input, now_millis(), &self.dishes)?;
        self.save(add_dish(&self.dishes, dish.clone()))?;
        tracing::info!(
            dish_id = %dish.id,
            name = %dish.name,
            count = self.dishes.len(),
            "Dish added"
        );
        Ok(dish)
    }

    /// Remove the dish with `id`; an unknown id is a no-op
    ///
    /// Returns whether a dish was removed. The collection is written back
    /// either way.
    pub fn remove(&mut self, id: &str) -> AppResult<bool> {
        let before = self.dishes.len();
        self.save(remove_dish(&self.dishes, id))?;
        let removed = self.dishes.len() < before;
        tracing::info!(dish_id = %id, removed, count = self.dishes.len(), "Dish removed");
        Ok(removed)
    }
}
