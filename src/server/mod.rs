//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that wires the injected stores into
//! the dish and order routes and adds health checks, tracing and CORS.

pub mod builder;
pub mod router;
pub mod state;

pub use builder::ServerBuilder;
pub use state::AppState;
