// In memory implementation of the KeyValueStorage port.
//
// Purpose
// - Support cart store tests and single-process sessions without touching disk.
//
// Responsibilities
// - Keep values in a map.
// - Fail every call while switched offline.
// - Optionally fail only removals.

use crate::shared::infrastructure::key_value_storage::{KeyValueStorage, StorageError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStorage {
    values: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
    fail_removes: AtomicBool,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage
            .values
            .get_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_fail_removes(&self, fail: bool) {
        self.fail_removes.store(fail, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StorageError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("Storage offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for InMemoryKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_online()?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_online()?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_online()?;
        if self.fail_removes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("Remove not permitted".into()));
        }
        self.values.write().await.remove(key);
        Ok(())
    }
}
