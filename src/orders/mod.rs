//! Order resource: customer orders of dishes
//!
//! Orders start without a status. An update sets one, a `delivered` order is
//! frozen, and only `pending` orders may be deleted.

pub mod handlers;
pub mod validators;

pub use validators::OrderPipelines;

use crate::core::Resource;
use crate::core::validation::validators::{as_positive_integer, as_text};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Wire names, in lifecycle order
    pub const ALL: &'static [&'static str] =
        &["pending", "preparing", "out-for-delivery", "delivered"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "out-for-delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

/// One dish within an order
///
/// Whatever the client sent about the dish (usually a snapshot with `id`,
/// `name`, `price`) is kept verbatim next to the quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl LineItem {
    fn from_value(value: &Value) -> Self {
        let mut details = value.as_object().cloned().unwrap_or_default();
        let quantity = details
            .remove("quantity")
            .as_ref()
            .and_then(as_positive_integer)
            .unwrap_or_default();
        Self { quantity, details }
    }

    /// The dish id carried by this line item, if any
    pub fn dish_id(&self) -> Option<&str> {
        self.details.get("id").and_then(Value::as_str)
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl Order {
    /// Build an order from a validated `data` payload
    ///
    /// New orders carry no status, whatever the payload says.
    pub fn from_data(id: String, data: &Value) -> Self {
        let mut order = Self {
            id,
            deliver_to: String::new(),
            mobile_number: String::new(),
            dishes: Vec::new(),
            status: None,
        };
        order.apply_details(data);
        order
    }

    /// Overwrite delivery details, line items and status from a validated
    /// update payload
    pub fn apply(&mut self, data: &Value) {
        self.apply_details(data);
        self.status = data["status"].as_str().and_then(OrderStatus::parse);
    }

    fn apply_details(&mut self, data: &Value) {
        self.deliver_to = as_text(&data["deliverTo"]);
        self.mobile_number = as_text(&data["mobileNumber"]);
        self.dishes = data["dishes"]
            .as_array()
            .map(|items| items.iter().map(LineItem::from_value).collect())
            .unwrap_or_default();
    }

    pub fn is_pending(&self) -> bool {
        self.status == Some(OrderStatus::Pending)
    }

    pub fn is_delivered(&self) -> bool {
        self.status == Some(OrderStatus::Delivered)
    }

    /// Whether any line item refers to the given dish
    pub fn contains_dish(&self, dish_id: &str) -> bool {
        self.dishes.iter().any(|item| item.dish_id() == Some(dish_id))
    }
}

impl Resource for Order {
    fn label() -> &'static str {
        "Order"
    }

    fn resource_name() -> &'static str {
        "orders"
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
            "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
            "mobileNumber": "(505) 143-3369",
            "status": "preparing",
            "dishes": [
                { "id": "d1", "name": "Falafel", "price": 8, "quantity": 2 }
            ]
        })
    }

    #[test]
    fn test_status_wire_names() {
        for name in OrderStatus::ALL {
            let status = OrderStatus::parse(name).unwrap();
            assert_eq!(status.as_str(), *name);
            assert_eq!(serde_json::to_value(status).unwrap(), json!(name));
        }
        assert!(OrderStatus::parse("cancelled").is_none());
    }

    #[test]
    fn test_from_data_ignores_status() {
        let order = Order::from_data("o1".to_string(), &payload());
        assert_eq!(order.status, None);
        assert_eq!(order.deliver_to, "308 Negra Arroyo Lane, Albuquerque, NM");
        assert_eq!(order.dishes.len(), 1);
        assert_eq!(order.dishes[0].quantity, 2);
        assert_eq!(order.dishes[0].dish_id(), Some("d1"));
    }

    #[test]
    fn test_apply_sets_status() {
        let mut order = Order::from_data("o1".to_string(), &payload());
        order.apply(&payload());
        assert_eq!(order.status, Some(OrderStatus::Preparing));
        assert!(!order.is_pending());
        assert!(!order.is_delivered());
    }

    #[test]
    fn test_serialization_uses_camel_case_and_keeps_line_item_fields() {
        let order = Order::from_data("o1".to_string(), &payload());
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["deliverTo"], "308 Negra Arroyo Lane, Albuquerque, NM");
        assert_eq!(json["mobileNumber"], "(505) 143-3369");
        assert!(json.get("status").is_none());
        assert_eq!(
            json["dishes"][0],
            json!({ "id": "d1", "name": "Falafel", "price": 8, "quantity": 2 })
        );
    }

    #[test]
    fn test_contains_dish() {
        let order = Order::from_data("o1".to_string(), &payload());
        assert!(order.contains_dish("d1"));
        assert!(!order.contains_dish("d2"));
    }
}
