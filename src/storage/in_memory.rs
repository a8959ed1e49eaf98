//! In-memory implementation of Store for development and testing

use crate::core::{Resource, Store};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory resource store
///
/// Keeps resources in insertion order so listings are stable. Uses RwLock
/// for thread-safe access; clones share the same collection.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    items: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl<T: Resource> InMemoryStore<T> {
    /// Create a store pre-populated with resources
    pub fn with_items(items: impl IntoIterator<Item = T>) -> Self {
        let map = items
            .into_iter()
            .map(|item| (item.id().to_string(), item))
            .collect();
        Self {
            items: Arc::new(RwLock::new(map)),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> Store<T> for InMemoryStore<T> {
    async fn get(&self, id: &str) -> Result<Option<T>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items.values().cloned().collect())
    }

    async fn insert(&self, resource: T) -> Result<T> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        items.insert(resource.id().to_string(), resource.clone());

        Ok(resource)
    }

    async fn update(&self, id: &str, resource: T) -> Result<Option<T>> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(slot) = items.get_mut(id) else {
            return Ok(None);
        };
        *slot = resource.clone();

        Ok(Some(resource))
    }

    async fn delete(&self, id: &str) -> Result<Option<T>> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(items.shift_remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Plate {
        id: String,
        name: String,
    }

    impl Plate {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
            }
        }
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

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryStore::new();
        store.insert(Plate::new("a", "soup")).await.unwrap();

        let found = store.get("a").await.unwrap();
        assert_eq!(found, Some(Plate::new("a", "soup")));
        assert!(store.get("b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = InMemoryStore::new();
        for id in ["c", "a", "b"] {
            store.insert(Plate::new(id, id)).await.unwrap();
        }

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let store = InMemoryStore::with_items([Plate::new("a", "soup"), Plate::new("b", "salad")]);

        store.update("a", Plate::new("a", "stew")).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all[0], Plate::new("a", "stew"));
        assert_eq!(all[1], Plate::new("b", "salad"));
    }

    #[tokio::test]
    async fn test_update_missing_stores_nothing() {
        let store: InMemoryStore<Plate> = InMemoryStore::new();
        let updated = store.update("x", Plate::new("x", "soup")).await.unwrap();
        assert!(updated.is_none());
        assert!(store.get("x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_and_preserves_order() {
        let store = InMemoryStore::with_items([
            Plate::new("a", "1"),
            Plate::new("b", "2"),
            Plate::new("c", "3"),
        ]);

        let removed = store.delete("b").await.unwrap();
        assert_eq!(removed, Some(Plate::new("b", "2")));
        assert!(store.delete("b").await.unwrap().is_none());

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.insert(Plate::new("a", "soup")).await.unwrap();
        assert!(other.get("a").await.unwrap().is_some());
    }
}
