//! Order validators and pipelines

use super::{Order, OrderStatus};
use crate::core::validation::validators::{
    as_positive_integer, body_data_has, body_data_is_text, data_exists, id_matches_route, in_list,
};
use crate::core::{ApiError, Pipeline, RequestContext};

/// Validator: `dishes` is a non-empty array
pub fn dishes_not_empty(ctx: &RequestContext<Order>) -> Result<(), ApiError> {
    match ctx.field("dishes").as_array() {
        Some(items) if !items.is_empty() => Ok(()),
        _ => Err(ApiError::validation("Order must include at least one dish")),
    }
}

/// Validator: every line item has an integer `quantity` greater than zero
///
/// Reports the first offending index.
pub fn dish_quantities_valid(ctx: &RequestContext<Order>) -> Result<(), ApiError> {
    let Some(items) = ctx.field("dishes").as_array() else {
        return Ok(());
    };
    match items
        .iter()
        .position(|item| as_positive_integer(&item["quantity"]).is_none())
    {
        Some(index) => Err(ApiError::validation(format!(
            "Dish {} must have a quantity that is an integer greater than 0",
            index
        ))),
        None => Ok(()),
    }
}

/// Validator: `status` names a known order status
pub fn status_valid()
-> impl Fn(&RequestContext<Order>) -> Result<(), ApiError> + Send + Sync + Clone {
    in_list::<Order>(
        "status",
        OrderStatus::ALL,
        "Order must have a status of pending, preparing, out-for-delivery, delivered",
    )
}

/// Validator: the stored order has not been delivered yet
pub fn not_delivered(ctx: &RequestContext<Order>) -> Result<(), ApiError> {
    if ctx.current().is_some_and(Order::is_delivered) {
        Err(ApiError::validation("A delivered order cannot be changed"))
    } else {
        Ok(())
    }
}

/// Validator: the stored order is still pending
pub fn is_pending(ctx: &RequestContext<Order>) -> Result<(), ApiError> {
    if ctx.current().is_some_and(Order::is_pending) {
        Ok(())
    } else {
        Err(ApiError::validation(
            "An order cannot be deleted unless it is pending",
        ))
    }
}

/// The ordered pipelines guarding each order route
#[derive(Clone)]
pub struct OrderPipelines {
    pub create: Pipeline<Order>,
    pub read: Pipeline<Order>,
    pub update: Pipeline<Order>,
    pub delete: Pipeline<Order>,
}

impl OrderPipelines {
    pub fn new() -> Self {
        let create = Pipeline::new()
            .validate(data_exists())
            .validate(dishes_not_empty)
            .validate(dish_quantities_valid)
            .validate(body_data_has("mobileNumber"))
            .validate(body_data_is_text("mobileNumber"))
            .validate(body_data_has("deliverTo"))
            .validate(body_data_is_text("deliverTo"))
            .validate(body_data_has("dishes"));

        // Delivered orders are frozen: checked before anything in the payload
        let update = Pipeline::new()
            .exists()
            .validate(not_delivered)
            .validate(data_exists())
            .validate(dishes_not_empty)
            .validate(dish_quantities_valid)
            .validate(status_valid())
            .validate(body_data_has("deliverTo"))
            .validate(body_data_is_text("deliverTo"))
            .validate(body_data_has("mobileNumber"))
            .validate(body_data_is_text("mobileNumber"))
            .validate(body_data_has("dishes"))
            .validate(id_matches_route());

        Self {
            create,
            read: Pipeline::new().exists(),
            update,
            delete: Pipeline::new().exists().validate(is_pending),
        }
    }
}

impl Default for OrderPipelines {
    fn default() -> Self {
        Self::new()
    }
}
