//! HTTP handlers for order operations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::Order;
use crate::core::{ApiError, DataEnvelope, JsonBody, RequestContext};
use crate::server::AppState;

/// List all orders
///
/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<DataEnvelope<Vec<Order>>>, ApiError> {
    let orders = state.orders.list().await?;
    Ok(Json(DataEnvelope::new(orders)))
}

/// List the orders containing a given dish
///
/// GET /dishes/{dish_id}/orders
pub async fn list_orders_for_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<DataEnvelope<Vec<Order>>>, ApiError> {
    let orders = state
        .orders
        .list()
        .await?
        .into_iter()
        .filter(|order| order.contains_dish(&dish_id))
        .collect();
    Ok(Json(DataEnvelope::new(orders)))
}

/// Create an order
///
/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<DataEnvelope<Order>>), ApiError> {
    let mut ctx = RequestContext::for_body(body);
    state
        .order_pipelines
        .create
        .run(&mut ctx, state.orders.as_ref())
        .await?;

    let order = Order::from_data(state.ids.next_id(), ctx.data());
    let order = state.orders.insert(order).await?;
    tracing::debug!(id = %order.id, dishes = order.dishes.len(), "order created");

    Ok((StatusCode::CREATED, Json(DataEnvelope::new(order))))
}

/// Get an order by id
///
/// GET /orders/{order_id}
pub async fn read_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<DataEnvelope<Order>>, ApiError> {
    let mut ctx = RequestContext::for_route(order_id);
    state
        .order_pipelines
        .read
        .run(&mut ctx, state.orders.as_ref())
        .await?;

    Ok(Json(DataEnvelope::new(ctx.take_current()?)))
}

/// Replace an order's details and status
///
/// PUT /orders/{order_id}
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<DataEnvelope<Order>>, ApiError> {
    let mut ctx = RequestContext::for_route_and_body(order_id, body);
    state
        .order_pipelines
        .update
        .run(&mut ctx, state.orders.as_ref())
        .await?;

    let mut order = ctx.take_current()?;
    order.apply(ctx.data());
    let id = order.id.clone();
    let order = state
        .orders
        .update(&id, order)
        .await?
        .ok_or_else(|| ApiError::resource_not_found::<Order>(&id))?;
    tracing::debug!(
        id = %order.id,
        status = order.status.map(|status| status.as_str()),
        "order updated"
    );

    Ok(Json(DataEnvelope::new(order)))
}

/// Delete a pending order
///
/// DELETE /orders/{order_id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut ctx = RequestContext::for_route(order_id);
    state
        .order_pipelines
        .delete
        .run(&mut ctx, state.orders.as_ref())
        .await?;

    let order = ctx.take_current()?;
    state.orders.delete(&order.id).await?;
    tracing::debug!(id = %order.id, "order deleted");

    Ok(StatusCode::NO_CONTENT)
}
