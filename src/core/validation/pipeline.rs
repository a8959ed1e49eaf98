//! Ordered validation pipelines
//!
//! A [`Pipeline`] is the list of guards a request passes through before its
//! terminal handler runs. Steps execute in the order they were added and the
//! first failure short-circuits the rest, so the order of `.validate(..)` and
//! `.exists()` calls decides which error a client sees.

use crate::core::entity::Resource;
use crate::core::error::ApiError;
use crate::core::store::Store;
use serde_json::Value;
use std::sync::Arc;

static NULL: Value = Value::Null;

/// Per-request state shared by the steps of a pipeline
///
/// Holds the raw JSON body, the id taken from the route (if any) and, once
/// the existence step has run, the resource currently stored under that id.
#[derive(Debug)]
pub struct RequestContext<T> {
    route_id: Option<String>,
    body: Value,
    current: Option<T>,
}

impl<T> RequestContext<T> {
    /// Context for a request without a body (read, delete)
    pub fn for_route(route_id: impl Into<String>) -> Self {
        Self {
            route_id: Some(route_id.into()),
            body: Value::Null,
            current: None,
        }
    }

    /// Context for a collection request (create)
    pub fn for_body(body: Value) -> Self {
        Self {
            route_id: None,
            body,
            current: None,
        }
    }

    /// Context for a member request with a body (update)
    pub fn for_route_and_body(route_id: impl Into<String>, body: Value) -> Self {
        Self {
            route_id: Some(route_id.into()),
            body,
            current: None,
        }
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    /// The `data` member of the body, or `null` when absent
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&NULL)
    }

    /// A field of `data`, or `null` when absent
    pub fn field(&self, name: &str) -> &Value {
        self.data().get(name).unwrap_or(&NULL)
    }

    /// The stored resource loaded by the existence step
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Take the resource loaded by the existence step
    ///
    /// Only handlers whose pipeline includes `.exists()` may call this.
    pub fn take_current(&mut self) -> Result<T, ApiError> {
        self.current.take().ok_or_else(|| {
            ApiError::Internal(anyhow::anyhow!(
                "pipeline did not load a resource for route id {:?}",
                self.route_id
            ))
        })
    }
}

/// A pure check over the request context
pub type Validator<T> = Arc<dyn Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync>;

enum Step<T> {
    Validate(Validator<T>),
    Exists,
}

impl<T> Clone for Step<T> {
    fn clone(&self) -> Self {
        match self {
            Step::Validate(v) => Step::Validate(v.clone()),
            Step::Exists => Step::Exists,
        }
    }
}

/// Ordered list of steps run before a terminal handler
///
/// # Example
///
/// ```rust,ignore
/// let update = Pipeline::<Dish>::new()
///     .validate(body_data_has("name"))
///     .validate(price_is_valid)
///     .exists()
///     .validate(id_matches_route());
///
/// update.run(&mut ctx, store.as_ref()).await?;
/// let dish = ctx.take_current()?;
/// ```
pub struct Pipeline<T> {
    steps: Vec<Step<T>>,
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<T: Resource> Pipeline<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a validator
    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync + 'static,
    {
        self.steps.push(Step::Validate(Arc::new(validator)));
        self
    }

    /// Append the existence check
    ///
    /// Looks up the route id in the store; a miss fails with
    /// `"{Label} not found: {id}"` (404), a hit is kept in the context for
    /// later steps and the terminal handler.
    pub fn exists(mut self) -> Self {
        self.steps.push(Step::Exists);
        self
    }

    /// Run every step in order, stopping at the first failure
    pub async fn run(
        &self,
        ctx: &mut RequestContext<T>,
        store: &dyn Store<T>,
    ) -> Result<(), ApiError> {
        self.run_steps(ctx, store).await.inspect_err(|err| {
            tracing::debug!(
                resource = T::resource_name(),
                route_id = ctx.route_id().unwrap_or("-"),
                error = %err,
                "request rejected"
            );
        })
    }

    async fn run_steps(
        &self,
        ctx: &mut RequestContext<T>,
        store: &dyn Store<T>,
    ) -> Result<(), ApiError> {
        for step in &self.steps {
            match step {
                Step::Validate(validator) => validator(&*ctx)?,
                Step::Exists => {
                    let id = ctx.route_id.clone().unwrap_or_default();
                    match store.get(&id).await? {
                        Some(found) => ctx.current = Some(found),
                        None => return Err(ApiError::resource_not_found::<T>(&id)),
                    }
                }
            }
        }
        Ok(())
    }
}

impl<T: Resource> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
