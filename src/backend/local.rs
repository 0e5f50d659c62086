//! Local backup backend.

use async_trait::async_trait;
use log::debug;

use super::{Backend, BackendError, DataSource};
use crate::codec;
use crate::constants::LOCAL_STORAGE_KEY;
use crate::item::Item;
use crate::storage::LocalStorage;

/// Keeps a structured copy of the full board under a fixed key.
#[derive(Clone)]
pub struct LocalBackend {
    storage: LocalStorage,
}

impl LocalBackend {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Storage the backup lives in
    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Write the full item list as the new backup
    pub async fn save_items(&self, items: &[Item]) -> Result<(), BackendError> {
        let blob = codec::encode_compact(items).map_err(|e| BackendError::Parse(e.to_string()))?;
        self.write(&blob).await?;
        debug!("💾 Backed up {} items locally", items.len());
        Ok(())
    }

    async fn write(&self, text: &str) -> Result<(), BackendError> {
        self.storage
            .put(LOCAL_STORAGE_KEY, text)
            .await
            .map_err(|e| BackendError::StorageUnavailable(e.to_string()))
    }
}

#[async_trait]
impl Backend for LocalBackend {
    fn source(&self) -> DataSource {
        DataSource::Backup
    }

    async fn load(&self) -> Result<Option<String>, BackendError> {
        self.storage
            .get(LOCAL_STORAGE_KEY)
            .await
            .map_err(|e| BackendError::StorageUnavailable(e.to_string()))
    }

    async fn save(&self, text: &str) -> Result<bool, BackendError> {
        self.write(text).await?;
        Ok(true)
    }
}
