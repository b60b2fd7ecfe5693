//! Cart Model

use super::Dish;
use serde::{Deserialize, Serialize};

/// One unit of a dish captured into the order in progress
///
/// A snapshot taken when the dish is added; later catalog changes do not
/// reach lines already in the cart. Unknown JSON fields are ignored, so carts
/// that stored whole dish objects still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Dish id (not unique within a cart)
    pub id: String,
    pub name: String,
    pub price: i64,
    pub image: String,
}

impl From<&Dish> for CartLine {
    fn from(dish: &Dish) -> Self {
        Self {
            id: dish.id.clone(),
            name: dish.name.clone(),
            price: dish.price,
            image: dish.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_line_snapshot_from_dish() {
        let dish = Dish {
            id: "7".to_string(),
            name: "Veg Kolhapuri".to_string(),
            category: "Spicy".to_string(),
            price: 249,
            description: "Fiery mixed vegetables".to_string(),
            rating: 4,
            image: "/images/kolhapuri.webp".to_string(),
            gif: "/gifs/kolhapuri.gif".to_string(),
        };
        let line = CartLine::from(&dish);
        assert_eq!(line.id, "7");
        assert_eq!(line.price, 249);
        assert_eq!(line.image, "/images/kolhapuri.webp");
    }

    #[test]
    fn test_cart_line_ignores_extra_dish_fields() {
        let json = r#"{"id":"1","name":"Veg Angara","category":"Spicy","price":299,
            "description":"x","rating":4,"image":"/images/a.webp","gif":"/gifs/a.gif"}"#;
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.name, "Veg Angara");
        assert_eq!(line.price, 299);
    }

    #[test]
    fn test_cart_line_json_shape() {
        let line = CartLine {
            id: "2".to_string(),
            name: "Shev Bhaji".to_string(),
            price: 199,
            image: "/images/sizzling-dish.jpeg".to_string(),
        };
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "2",
                "name": "Shev Bhaji",
                "price": 199,
                "image": "/images/sizzling-dish.jpeg"
            })
        );
    }
}
