// Key-value storage port: the medium the cart is persisted to.
//
// Purpose
// - Stand in for the browser's local storage: string values under string keys.
//
// Boundaries
// - Values are opaque strings. Callers own serialization.
// - Removing an absent key is not an error.
//
// Testing guidance
// - Use the in memory implementation; it can be switched offline to exercise degraded loads.

pub mod in_memory;
pub mod json_file;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
