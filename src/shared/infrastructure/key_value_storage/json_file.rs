// JSON file implementation of the KeyValueStorage port.
//
// Purpose
// - Persist the cart between command line invocations, the way local storage persists it
//   between page loads.
//
// Responsibilities
// - Keep every key in one JSON object on disk.
// - Replace the file atomically: write a sibling temp file, then rename it over the target.
// - Treat a missing file as empty storage.

use crate::shared::infrastructure::key_value_storage::{KeyValueStorage, StorageError};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

type Entries = BTreeMap<String, String>;

pub struct JsonFileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Entries, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).map_err(|err| {
            StorageError::Backend(format!(
                "corrupt storage file {}: {err}",
                self.path.display()
            ))
        })
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);
        tokio::fs::write(&temp_path, bytes).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for JsonFileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}
