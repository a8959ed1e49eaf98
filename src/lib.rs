//! # GrubDash
//!
//! A small REST API for managing dishes and orders.
//!
//! ## Features
//!
//! - **Ordered validation pipelines**: every route runs an explicit list of
//!   validators before its handler, stopping at the first failure
//! - **Injected storage**: handlers talk to a [`Store`](core::Store) trait;
//!   an in-memory implementation ships by default
//! - **Order lifecycle rules**: delivered orders are frozen and only pending
//!   orders can be deleted
//! - **Uniform errors**: every failure answers `{status, message}`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_dish_store(InMemoryStore::new())
//!         .with_order_store(InMemoryStore::new())
//!         .serve()
//!         .await
//! }
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET, POST | `/dishes` | 200, 201 |
//! | GET, PUT | `/dishes/{dishId}` | 200 |
//! | GET | `/dishes/{dishId}/orders` | 200 |
//! | GET, POST | `/orders` | 200, 201 |
//! | GET, PUT, DELETE | `/orders/{orderId}` | 200, 204 |

pub mod config;
pub mod core;
pub mod dishes;
pub mod orders;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, DataEnvelope, HexIdGenerator, IdGenerator, JsonBody, Pipeline, RequestContext,
        Resource, Store,
    };

    // === Resources ===
    pub use crate::dishes::{Dish, DishPipelines};
    pub use crate::orders::{LineItem, Order, OrderPipelines, OrderStatus};

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
