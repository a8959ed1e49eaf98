//! Core module containing the fundamental traits and types of the API

pub mod entity;
pub mod error;
pub mod id;
pub mod response;
pub mod store;
pub mod validation;

pub use entity::Resource;
pub use error::{ApiError, ErrorResponse};
pub use id::{HexIdGenerator, IdGenerator};
pub use response::DataEnvelope;
pub use store::Store;
pub use validation::{JsonBody, Pipeline, RequestContext};
