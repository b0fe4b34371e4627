//! Key-value persistence.
//!
//! [`KeyValueStore`] abstracts the browser's localStorage so persistence
//! logic can run against an in-memory map in tests. [`LocalStore`] holds no
//! handle; it looks localStorage up on every call, which keeps it `Send +
//! Sync` for use inside signals.

use serde::{Serialize, de::DeserializeOwned};

use crate::core::error::StorageError;
use crate::utils::dom;

/// Synchronous string key-value storage, last write wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read a JSON value. `Ok(None)` when the key is absent.
pub fn load_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, serde_json::Error> {
    store
        .get(key)
        .map(|json| serde_json::from_str(&json))
        .transpose()
}

/// Serialize and write a JSON value.
pub fn save_json<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)
        .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
    store.set(key, &json)
}

/// Browser localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .ok_or(StorageError::Unavailable)?
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// In-memory store for tests.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// A store whose writes and removals always fail, like a full quota.
        pub fn read_only() -> Self {
            Self {
                read_only: true,
                ..Self::default()
            }
        }

        pub fn with_entry(self, key: &str, value: &str) -> Self {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            self
        }

        pub fn contains(&self, key: &str) -> bool {
            self.entries.borrow().contains_key(key)
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::WriteFailed);
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::RemoveFailed);
            }
            self.entries.borrow_mut().remove(key);
            Ok(())
        }
    }

    // A shared reference is a store too, so tests can keep inspecting a
    // store after handing it to its owner.
    impl KeyValueStore for &MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            (**self).get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            (**self).set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            (**self).remove(key)
        }
    }
}
