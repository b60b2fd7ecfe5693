//! Default sample catalog
//!
//! Shown until an admin saves a catalog of their own.

use shared::models::{DEFAULT_DISH_GIF, Dish, DishCategory};

fn dish(
    id: &str,
    name: &str,
    category: DishCategory,
    price: i64,
    description: &str,
    rating: i32,
    image: &str,
) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        category: category.as_str().to_string(),
        price,
        description: description.to_string(),
        rating,
        image: image.to_string(),
        gif: DEFAULT_DISH_GIF.to_string(),
    }
}

/// The five seeded dishes, in menu order
pub fn default_dishes() -> Vec<Dish> {
    vec![
        dish(
            "1",
            "Veg Angara",
            DishCategory::Spicy,
            299,
            "Spicy mixed vegetable curry with aromatic spices",
            4,
            "/images/paneer-curry.webp",
        ),
        dish(
            "2",
            "Shev Bhaji",
            DishCategory::Spicy,
            199,
            "SPICY MAHARASHTRIAN CURRY TOPPED WITH CRUNCHY SHEV, COOKED IN TOMATO-ONION GRAVY.",
            4,
            "/images/sizzling-dish.jpeg",
        ),
        dish(
            "3",
            "Veg handi",
            DishCategory::ChefSpecial,
            399,
            "Mixed vegetables cooked in traditional handi style",
            5,
            "/images/matar-paneer.webp",
        ),
        dish(
            "4",
            "Mater Paneer",
            DishCategory::LowOil,
            299,
            "Fresh paneer cubes with green peas in rich tomato gravy",
            4,
            "/images/matar-paneer.webp",
        ),
        dish(
            "5",
            "Paneer Sultani",
            DishCategory::ChefSpecial,
            299,
            "Royal paneer dish with rich and creamy gravy",
            5,
            "/images/paneer-curry.webp",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let dishes = default_dishes();
        assert_eq!(dishes.len(), 5);
        let ids: Vec<&str> = dishes.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert!(dishes.iter().all(|d| (1..=5).contains(&d.rating)));
        assert!(
            dishes
                .iter()
                .all(|d| d.category.parse::<DishCategory>().is_ok())
        );
    }
}
