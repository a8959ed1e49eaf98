//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};

/// Server over empty in-memory stores
pub fn server() -> TestServer {
    server_with(InMemoryStore::new(), InMemoryStore::new())
}

/// Server over the given stores
pub fn server_with(dishes: InMemoryStore<Dish>, orders: InMemoryStore<Order>) -> TestServer {
    let app = ServerBuilder::new()
        .with_dish_store(dishes)
        .with_order_store(orders)
        .build()
        .unwrap();
    TestServer::new(app)
}

pub fn dish_data() -> Value {
    json!({
        "name": "Dolcelatte and chickpea spaghetti",
        "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
        "price": 19,
        "image_url": "https://images.example.com/spaghetti.jpg"
    })
}

pub fn order_data() -> Value {
    json!({
        "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
        "mobileNumber": "(505) 143-3369",
        "dishes": [
            {
                "id": "90c3d873684bf381dfab29034b5bba73",
                "name": "Falafel and tahini bagel",
                "description": "A warm bagel filled with falafel and tahini",
                "image_url": "https://images.example.com/bagel.jpg",
                "price": 6,
                "quantity": 1
            }
        ]
    })
}

/// A stored order with the given status
pub fn order_with_status(id: &str, status: Option<OrderStatus>) -> Order {
    let mut order = Order::from_data(id.to_string(), &order_data());
    order.status = status;
    order
}

/// Wrap a payload in the request envelope
pub fn body(data: Value) -> Value {
    json!({ "data": data })
}
