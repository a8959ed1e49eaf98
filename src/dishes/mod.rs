//! Dish resource: menu items
//!
//! Dishes are created and updated but never deleted. Every write goes
//! through one of the pipelines in [`validators`].

pub mod handlers;
pub mod validators;

pub use validators::DishPipelines;

use crate::core::Resource;
use crate::core::validation::validators::{as_positive_integer, as_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    /// Build a dish from a validated `data` payload
    pub fn from_data(id: String, data: &Value) -> Self {
        let mut dish = Self {
            id,
            name: String::new(),
            description: String::new(),
            price: 0,
            image_url: String::new(),
        };
        dish.apply(data);
        dish
    }

    /// Overwrite every mutable field from a validated `data` payload
    ///
    /// The id is left untouched.
    pub fn apply(&mut self, data: &Value) {
        self.name = as_text(&data["name"]);
        self.description = as_text(&data["description"]);
        self.price = as_positive_integer(&data["price"]).unwrap_or_default();
        self.image_url = as_text(&data["image_url"]);
    }
}

impl Resource for Dish {
    fn label() -> &'static str {
        "Dish"
    }

    fn resource_name() -> &'static str {
        "dishes"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "name": "Dolcelatte and chickpea spaghetti",
            "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            "price": 19,
            "image_url": "https://example.com/spaghetti.jpg"
        })
    }

    #[test]
    fn test_from_data_copies_fields() {
        let dish = Dish::from_data("d1".to_string(), &payload());
        assert_eq!(dish.id, "d1");
        assert_eq!(dish.name, "Dolcelatte and chickpea spaghetti");
        assert_eq!(dish.price, 19);
        assert_eq!(dish.image_url, "https://example.com/spaghetti.jpg");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut dish = Dish::from_data("d1".to_string(), &payload());
        let mut changed = payload();
        changed["id"] = json!("other");
        changed["price"] = json!(25);

        dish.apply(&changed);

        assert_eq!(dish.id, "d1");
        assert_eq!(dish.price, 25);
    }

    #[test]
    fn test_serializes_with_snake_case_image_url() {
        let dish = Dish::from_data("d1".to_string(), &payload());
        let json = serde_json::to_value(&dish).unwrap();
        assert_eq!(json["image_url"], "https://example.com/spaghetti.jpg");
        assert_eq!(json["price"], 19);
    }
}
