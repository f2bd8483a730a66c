//! Non-persistent storage capabilities.

use crate::storage::{KeyValueStorage, StorageError, StorageResult};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local map; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get_value(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_value(&self, key: &str, value: &str) -> StorageResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_value(&self, key: &str) -> StorageResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Storage for hosts without persistence: reads miss, writes are dropped.
///
/// With this capability the resolver always serves the baseline.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopKeyValueStorage;

impl KeyValueStorage for NoopKeyValueStorage {
    fn get_value(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set_value(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Ok(())
    }

    fn remove_value(&self, _key: &str) -> StorageResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryKeyValueStorage, NoopKeyValueStorage};
    use crate::storage::KeyValueStorage;

    #[test]
    fn memory_storage_round_trips_values() {
        let storage = MemoryKeyValueStorage::new();
        storage.set_value("a", "1").unwrap();
        assert_eq!(storage.get_value("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.len(), 1);
        storage.remove_value("a").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn noop_storage_never_returns_values() {
        let storage = NoopKeyValueStorage;
        storage.set_value("a", "1").unwrap();
        assert_eq!(storage.get_value("a").unwrap(), None);
    }
}
