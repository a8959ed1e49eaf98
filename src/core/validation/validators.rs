//! Reusable request validators
//!
//! These validators are shared by the dish and order pipelines. Presence
//! follows JavaScript truthiness because clients written against the API
//! send `""`, `0` and `false` to mean "not provided".

use super::pipeline::RequestContext;
use crate::core::entity::Resource;
use crate::core::error::ApiError;
use serde_json::Value;

/// Whether a JSON value counts as "provided"
///
/// `null`, `false`, `0` and `""` are absent; everything else, including
/// empty arrays and objects, is present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a value as an integer greater than zero
///
/// Integral floats such as `3.0` are accepted; fractions, strings and
/// non-positive numbers are not.
pub fn as_positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let f = value.as_f64()?;
    if f >= 1.0 && f.fract() == 0.0 && f < u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// Render a JSON value as text, keeping strings unquoted
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Validator: the body carries a `data` object
pub fn data_exists<T: Resource>()
-> impl Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync + Clone {
    |ctx: &RequestContext<T>| {
        if is_truthy(ctx.data()) {
            Ok(())
        } else {
            Err(ApiError::validation("Request must include data"))
        }
    }
}

/// Validator: `data.<field>` is present
pub fn body_data_has<T: Resource>(
    field: &'static str,
) -> impl Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync + Clone {
    move |ctx: &RequestContext<T>| {
        if is_truthy(ctx.field(field)) {
            Ok(())
        } else {
            Err(ApiError::validation(format!(
                "{} must include a {}",
                T::label(),
                field
            )))
        }
    }
}

/// Validator: a present `data.<field>` is a JSON string
///
/// Runs after [`body_data_has`], so absent values are left to that check.
pub fn body_data_is_text<T: Resource>(
    field: &'static str,
) -> impl Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync + Clone {
    move |ctx: &RequestContext<T>| match ctx.field(field) {
        Value::String(_) | Value::Null => Ok(()),
        _ => Err(ApiError::validation(format!(
            "{} {} must be a string",
            T::label(),
            field
        ))),
    }
}

/// Validator: `data.<field>` is one of the allowed strings
pub fn in_list<T: Resource>(
    field: &'static str,
    allowed: &'static [&'static str],
    message: &'static str,
) -> impl Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync + Clone {
    move |ctx: &RequestContext<T>| match ctx.field(field).as_str() {
        Some(s) if allowed.contains(&s) => Ok(()),
        _ => Err(ApiError::validation(message)),
    }
}

/// Validator: a present `data.id` equals the route id
///
/// Missing, `null` and empty ids are accepted since the id is never taken
/// from the body.
pub fn id_matches_route<T: Resource>()
-> impl Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync + Clone {
    |ctx: &RequestContext<T>| {
        let body_id = ctx.field("id");
        if !is_truthy(body_id) {
            return Ok(());
        }
        let route_id = ctx.route_id().unwrap_or_default();
        match body_id.as_str() {
            Some(id) if id == route_id => Ok(()),
            _ => {
                let shown = as_text(body_id);
                Err(ApiError::validation(format!(
                    "{label} id does not match route id. {label}: {shown}, Route: {route_id}",
                    label = T::label(),
                )))
            }
        }
    }
}
