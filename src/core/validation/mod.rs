//! Request validation
//!
//! Requests are checked by ordered [`Pipeline`]s of validators before a
//! handler mutates anything. The generic validators live here; resource
//! specific ones (price, quantities, order status) live next to their
//! resource.

pub mod extractor;
pub mod pipeline;
pub mod validators;

pub use extractor::JsonBody;
pub use pipeline::{Pipeline, RequestContext, Validator};
