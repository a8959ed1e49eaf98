//! Axum extractor for JSON request bodies
//!
//! `JsonBody` parses the request as JSON and turns parse failures into an
//! [`ApiError`], so malformed bodies get the same `{status, message}` shape
//! as every other error. A body sent without a JSON content type is a 415. Field-level checks happen later, in the pipeline.

use crate::core::error::ApiError;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde_json::Value;

/// A raw JSON body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(
///     State(state): State<DishState>,
///     JsonBody(body): JsonBody,
/// ) -> Result<impl IntoResponse, ApiError> {
///     // body is a serde_json::Value
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(payload)) => Ok(JsonBody(payload)),
            Err(JsonRejection::MissingJsonContentType(_)) => Err(ApiError::UnsupportedMediaType),
            Err(rejection) => Err(ApiError::InvalidJson {
                message: rejection.body_text(),
            }),
        }
    }
}
