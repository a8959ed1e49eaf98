//! Router builder utilities for resource routes

use crate::core::ApiError;
use crate::dishes::handlers::{create_dish, list_dishes, read_dish, update_dish};
use crate::orders::handlers::{
    create_order, delete_order, list_orders, list_orders_for_dish, read_order, update_order,
};
use crate::server::AppState;
use axum::{
    Json, Router,
    http::{Method, Uri},
    routing::get,
};
use serde_json::{Value, json};

/// Build the dish and order routes
///
/// - GET/POST /dishes
/// - GET/PUT /dishes/{dish_id}
/// - GET /dishes/{dish_id}/orders
/// - GET/POST /orders
/// - GET/PUT/DELETE /orders/{order_id}
///
/// Any other method on these paths answers 405.
pub fn build_resource_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/dishes",
            get(list_dishes)
                .post(create_dish)
                .fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dish_id}",
            get(read_dish).put(update_dish).fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dish_id}/orders",
            get(list_orders_for_dish).fallback(method_not_allowed),
        )
        .route(
            "/orders",
            get(list_orders)
                .post(create_order)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/{order_id}",
            get(read_order)
                .put(update_order)
                .delete(delete_order)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "grubdash"
    }))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Path not found: {}", uri.path()))
}
