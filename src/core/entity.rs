//! Base trait for the resources served by the API

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A resource stored by id and exposed over REST
///
/// Implemented by [`Dish`](crate::dishes::Dish) and [`Order`](crate::orders::Order).
/// The associated names feed error messages and route paths, so both
/// resources share the same pipeline and store machinery.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Capitalised label used in messages (e.g. "Dish")
    fn label() -> &'static str;

    /// Plural resource name used in routes (e.g. "dishes")
    fn resource_name() -> &'static str;

    /// Unique identifier
    fn id(&self) -> &str;
}
