//! Backend factory for assembling the loader chain from configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use super::{Backend, CloudBackend, DemoBackend, HttpFetcher, LocalBackend, SimulatedPublisher};
use crate::config::Config;
use crate::storage::LocalStorage;

/// The backends the sync service works with.
///
/// `cloud` is the remote, `local` the backup every load and save also
/// writes to. [`BackendSet::loaders`] gives the fallback order.
#[derive(Clone)]
pub struct BackendSet {
    pub cloud: Arc<dyn Backend>,
    pub local: LocalBackend,
    pub demo: Arc<dyn Backend>,
}

impl BackendSet {
    /// Pair a cloud backend with a local backup; demo data closes the chain.
    pub fn new(cloud: Arc<dyn Backend>, local: LocalBackend) -> Self {
        Self {
            cloud,
            local,
            demo: Arc::new(DemoBackend),
        }
    }

    /// Loaders in the order they are tried: cloud, backup, demo.
    pub fn loaders(&self) -> Vec<Arc<dyn Backend>> {
        vec![
            Arc::clone(&self.cloud),
            Arc::new(self.local.clone()),
            Arc::clone(&self.demo),
        ]
    }
}

/// Create the production backend set: HTTP reads, simulated writes, SQLite backup.
///
/// # Errors
/// Returns error if the HTTP client cannot be built
pub fn create_backends(config: &Config, storage: &LocalStorage) -> Result<BackendSet> {
    let fetcher = HttpFetcher::new(
        vec![config.sync.primary_url.clone(), config.sync.secondary_url.clone()],
        Duration::from_secs(config.sync.request_timeout_secs),
    )?;
    let publisher = SimulatedPublisher::new(
        storage.clone(),
        Duration::from_millis(config.sync.simulated_save_delay_ms),
    );

    let cloud = CloudBackend::new(Arc::new(fetcher), Arc::new(publisher));
    Ok(BackendSet::new(Arc::new(cloud), LocalBackend::new(storage.clone())))
}
