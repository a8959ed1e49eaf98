//! Store trait for resource persistence

use crate::core::entity::Resource;
use anyhow::Result;
use async_trait::async_trait;

/// Storage capability for a single resource type
///
/// Implementations provide by-id access to a collection of resources.
/// The handlers are agnostic to the underlying storage mechanism.
#[async_trait]
pub trait Store<T: Resource>: Send + Sync {
    /// Get a resource by ID
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// List all resources in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Insert a new resource
    async fn insert(&self, resource: T) -> Result<T>;

    /// Replace an existing resource
    ///
    /// Returns `None` without storing anything if no resource with this ID
    /// exists, e.g. when it was deleted after the caller read it.
    async fn update(&self, id: &str, resource: T) -> Result<Option<T>>;

    /// Delete a resource, returning it if it existed
    async fn delete(&self, id: &str) -> Result<Option<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct Plate {
        id: String,
    }

    impl Resource for Plate {
        fn label() -> &'static str {
            "Plate"
        }

        fn resource_name() -> &'static str {
            "plates"
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    // The trait can be used in generic contexts and as a trait object
    #[allow(dead_code)]
    async fn generic_insert<T, S>(store: &S, resource: T) -> Result<T>
    where
        T: Resource,
        S: Store<T> + ?Sized,
    {
        store.insert(resource).await
    }

    #[allow(dead_code)]
    fn boxed(store: std::sync::Arc<dyn Store<Plate>>) -> std::sync::Arc<dyn Store<Plate>> {
        store
    }

    #[test]
    fn test_resource_names() {
        let plate = Plate {
            id: "p1".to_string(),
        };
        assert_eq!(plate.id(), "p1");
        assert_eq!(Plate::label(), "Plate");
        assert_eq!(Plate::resource_name(), "plates");
    }
}
