//! Application state shared across handlers

use crate::core::{IdGenerator, Store};
use crate::dishes::{Dish, DishPipelines};
use crate::orders::{Order, OrderPipelines};
use std::sync::Arc;

/// Application state shared across handlers
///
/// Cloned per request; everything inside is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub dishes: Arc<dyn Store<Dish>>,
    pub orders: Arc<dyn Store<Order>>,
    pub ids: Arc<dyn IdGenerator>,
    pub dish_pipelines: Arc<DishPipelines>,
    pub order_pipelines: Arc<OrderPipelines>,
}

impl AppState {
    pub fn new(
        dishes: Arc<dyn Store<Dish>>,
        orders: Arc<dyn Store<Order>>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            dishes,
            orders,
            ids,
            dish_pipelines: Arc::new(DishPipelines::new()),
            order_pipelines: Arc::new(OrderPipelines::new()),
        }
    }
}
