//! Persistent collection store.
//!
//! A thin typed layer over the storage medium: values are serialized to JSON
//! text on write and deserialized on read, with read-through default seeding
//! on first access. The store does not know the shape of any particular
//! collection; defaults are supplied per call site.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;
use crate::storage::StorageMedium;

/// Typed key-value store with write-through persistence.
#[derive(Clone)]
pub struct CollectionStore {
    medium: Arc<dyn StorageMedium>,
}

impl CollectionStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Get the stored value for `key`, seeding and persisting `default` on
    /// first access.
    ///
    /// Stored text that fails to deserialize is treated as absent: the
    /// failure is logged and the default is seeded in its place.
    pub fn get<T>(&self, key: &str, default: T) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
    {
        match self.medium.read(key)? {
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => Ok(value),
                Err(err) => {
                    tracing::warn!(key, "Discarding undeserializable stored value: {}", err);
                    self.seed(key, default)
                }
            },
            None => self.seed(key, default),
        }
    }

    /// Replace the stored value for `key`, writing through synchronously.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let text = serde_json::to_string(value)?;
        self.medium.write(key, &text)
    }

    /// Read the stored value for `key` without seeding anything.
    ///
    /// Absent and corrupt values both map to `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.medium.read(key)? {
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => Ok(Some(value)),
                Err(err) => {
                    tracing::warn!(key, "Ignoring undeserializable stored value: {}", err);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Delete the stored value for `key`. Missing keys are a no-op.
    pub fn remove(&self, key: &str) -> Result<(), AppError> {
        self.medium.delete(key)
    }

    fn seed<T: Serialize>(&self, key: &str, default: T) -> Result<T, AppError> {
        let text = serde_json::to_string(&default)?;
        self.medium.write(key, &text)?;
        Ok(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> (CollectionStore, Arc<MemoryStorage>) {
        let medium = Arc::new(MemoryStorage::new());
        (CollectionStore::new(medium.clone()), medium)
    }

    #[test]
    fn test_get_seeds_default_on_first_access() {
        let (store, medium) = store();

        let value: Vec<String> = store.get("tags", vec!["one".to_string()]).unwrap();
        assert_eq!(value, vec!["one".to_string()]);

        // The default was persisted, not just returned.
        assert_eq!(
            medium.read("tags").unwrap(),
            Some("[\"one\"]".to_string())
        );
    }

    #[test]
    fn test_get_is_idempotent() {
        let (store, _) = store();

        let first: Vec<i64> = store.get("numbers", vec![1, 2]).unwrap();
        let second: Vec<i64> = store.get("numbers", vec![9, 9]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_dominates_default() {
        let (store, _) = store();

        store.set("numbers", &vec![5, 6, 7]).unwrap();
        let value: Vec<i64> = store.get("numbers", Vec::new()).unwrap();
        assert_eq!(value, vec![5, 6, 7]);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        let (store, medium) = store();

        medium.write("numbers", "not json at all").unwrap();
        let value: Vec<i64> = store.get("numbers", vec![42]).unwrap();
        assert_eq!(value, vec![42]);

        // The corrupt text was replaced by the seeded default.
        let again: Vec<i64> = store.get("numbers", Vec::new()).unwrap();
        assert_eq!(again, vec![42]);
    }

    #[test]
    fn test_load_does_not_seed() {
        let (store, medium) = store();

        let value: Option<Vec<i64>> = store.load("numbers").unwrap();
        assert_eq!(value, None);
        assert_eq!(medium.read("numbers").unwrap(), None);
    }

    #[test]
    fn test_load_maps_corrupt_to_none() {
        let (store, medium) = store();

        medium.write("numbers", "{broken").unwrap();
        let value: Option<Vec<i64>> = store.load("numbers").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let (store, _) = store();
        store.remove("never-written").unwrap();
    }
}
