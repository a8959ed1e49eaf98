//! HTTP handlers for dish operations
//!
//! Each handler builds a request context, runs the matching pipeline and
//! only then touches the store.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::Dish;
use crate::core::{ApiError, DataEnvelope, JsonBody, RequestContext};
use crate::server::AppState;

/// List all dishes
///
/// GET /dishes
pub async fn list_dishes(
    State(state): State<AppState>,
) -> Result<Json<DataEnvelope<Vec<Dish>>>, ApiError> {
    let dishes = state.dishes.list().await?;
    Ok(Json(DataEnvelope::new(dishes)))
}

/// Create a dish
///
/// POST /dishes
pub async fn create_dish(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<DataEnvelope<Dish>>), ApiError> {
    let mut ctx = RequestContext::for_body(body);
    state
        .dish_pipelines
        .create
        .run(&mut ctx, state.dishes.as_ref())
        .await?;

    let dish = Dish::from_data(state.ids.next_id(), ctx.data());
    let dish = state.dishes.insert(dish).await?;
    tracing::debug!(id = %dish.id, "dish created");

    Ok((StatusCode::CREATED, Json(DataEnvelope::new(dish))))
}

/// Get a dish by id
///
/// GET /dishes/{dish_id}
pub async fn read_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<DataEnvelope<Dish>>, ApiError> {
    let mut ctx = RequestContext::for_route(dish_id);
    state
        .dish_pipelines
        .read
        .run(&mut ctx, state.dishes.as_ref())
        .await?;

    Ok(Json(DataEnvelope::new(ctx.take_current()?)))
}

/// Replace a dish's fields; the id never changes
///
/// PUT /dishes/{dish_id}
pub async fn update_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<DataEnvelope<Dish>>, ApiError> {
    let mut ctx = RequestContext::for_route_and_body(dish_id, body);
    state
        .dish_pipelines
        .update
        .run(&mut ctx, state.dishes.as_ref())
        .await?;

    let mut dish = ctx.take_current()?;
    dish.apply(ctx.data());
    let id = dish.id.clone();
    let dish = state
        .dishes
        .update(&id, dish)
        .await?
        .ok_or_else(|| ApiError::resource_not_found::<Dish>(&id))?;
    tracing::debug!(id = %dish.id, "dish updated");

    Ok(Json(DataEnvelope::new(dish)))
}
