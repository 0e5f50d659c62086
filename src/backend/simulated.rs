//! Simulated cloud publisher.
//!
//! There is no real remote write. Publishing waits for a fixed delay, keeps
//! a local snapshot of what would have been uploaded, and reports success.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use super::{BackendError, CloudPublisher};
use crate::constants::{CLOUD_SNAPSHOT_KEY, CLOUD_SNAPSHOT_SOURCE};
use crate::storage::LocalStorage;

/// What the simulated cloud last received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudSnapshot {
    pub data: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

impl CloudSnapshot {
    /// Read the last snapshot back from local storage
    pub async fn load(storage: &LocalStorage) -> Result<Option<Self>> {
        match storage.get(CLOUD_SNAPSHOT_KEY).await? {
            Some(raw) => {
                let snapshot = serde_json::from_str(&raw).context("Failed to parse cloud snapshot")?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }
}

pub struct SimulatedPublisher {
    storage: LocalStorage,
    delay: Duration,
}

impl SimulatedPublisher {
    pub fn new(storage: LocalStorage, delay: Duration) -> Self {
        Self { storage, delay }
    }
}

#[async_trait]
impl CloudPublisher for SimulatedPublisher {
    async fn publish(&self, text: &str) -> Result<(), BackendError> {
        info!("Simulating save to cloud: {} characters", text.len());
        tokio::time::sleep(self.delay).await;

        let snapshot = CloudSnapshot {
            data: text.to_string(),
            timestamp: Utc::now(),
            source: CLOUD_SNAPSHOT_SOURCE.to_string(),
        };
        let raw = serde_json::to_string(&snapshot).map_err(|e| BackendError::Parse(e.to_string()))?;

        self.storage
            .put(CLOUD_SNAPSHOT_KEY, &raw)
            .await
            .map_err(|e| BackendError::StorageUnavailable(e.to_string()))
    }
}
