//! Synchronization service module for the lostfound application.
//!
//! This module provides the [`SyncService`] struct which owns the session's
//! item [`Repository`] and keeps it in step with the storage backends. It
//! loads the board through an ordered fallback chain (cloud, local backup,
//! demo data), saves new reports to the cloud with a local backup, and can
//! refresh itself on a fixed interval.

pub mod persist;
pub mod refresh;
pub mod repository;

use chrono::{DateTime, Utc};
use log::warn;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::backend::{BackendSet, CloudSnapshot, DataSource};
use crate::constants::{
    STATUS_IDLE, STATUS_SAVED, STATUS_SAVED_LOCALLY, STATUS_SAVE_FAILED, STATUS_SAVING, STATUS_SYNCED,
    STATUS_SYNCING, STATUS_SYNC_FAILED,
};
use crate::item::{FilterType, Item};
use crate::query::ItemStats;
use crate::utils::datetime;

pub use repository::Repository;

/// Service that owns the item repository and drives loads and saves.
///
/// Cloning is cheap: every clone shares the same repository and state, so
/// the UI can hand a clone to a background task. The repository lock is
/// never held across a backend call, so when a save and a refresh overlap
/// the one that finishes last decides the repository contents.
///
/// # Example
/// ```rust,no_run
/// use lostfound::backend::create_backends;
/// use lostfound::config::Config;
/// use lostfound::storage::LocalStorage;
/// use lostfound::sync::SyncService;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::default();
/// let storage = LocalStorage::in_memory().await?;
/// let sync_service = SyncService::new(create_backends(&config, &storage)?);
///
/// sync_service.refresh().await?;
/// let repository = sync_service.repository().await;
/// println!("{} items on the board", repository.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SyncService {
    backends: BackendSet,
    repository: Arc<Mutex<Repository>>,
    state: Arc<Mutex<SyncState>>,
    last_sync: Arc<Mutex<Option<DateTime<Utc>>>>,
    refresh_in_progress: Arc<Mutex<bool>>,
}

/// Where the sync service currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    /// Nothing has been loaded yet
    #[default]
    Idle,
    /// A refresh is walking the loader chain
    Syncing,
    /// The last refresh succeeded; `source` tells which loader answered
    Synced { source: DataSource },
    /// The last refresh failed and the repository was left as it was
    SyncFailed { message: String },
    /// A new item is being saved
    Saving,
    /// The last item reached the cloud and the backup
    Saved,
    /// The cloud rejected the last item; only the backup has it
    SavedLocally,
    /// The last save could not even write the backup
    SaveFailed { message: String },
}

impl SyncState {
    /// Short label for the status indicator
    pub fn label(&self) -> &'static str {
        match self {
            SyncState::Idle => STATUS_IDLE,
            SyncState::Syncing => STATUS_SYNCING,
            SyncState::Synced { .. } => STATUS_SYNCED,
            SyncState::SyncFailed { .. } => STATUS_SYNC_FAILED,
            SyncState::Saving => STATUS_SAVING,
            SyncState::Saved => STATUS_SAVED,
            SyncState::SavedLocally => STATUS_SAVED_LOCALLY,
            SyncState::SaveFailed { .. } => STATUS_SAVE_FAILED,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SyncState::Syncing | SyncState::Saving)
    }
}

/// Result of a refresh call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The repository now holds `count` items from `source`
    Loaded { source: DataSource, count: usize },
    /// Another refresh was already running; nothing changed
    AlreadyRunning,
}

/// Messages the periodic refresher sends back to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Refreshed(RefreshOutcome),
    RefreshFailed(String),
}

impl SyncService {
    /// Creates a new `SyncService` over the given backends with an empty repository.
    pub fn new(backends: BackendSet) -> Self {
        Self {
            backends,
            repository: Arc::new(Mutex::new(Repository::new())),
            state: Arc::new(Mutex::new(SyncState::Idle)),
            last_sync: Arc::new(Mutex::new(None)),
            refresh_in_progress: Arc::new(Mutex::new(false)),
        }
    }

    /// Snapshot of the repository for rendering
    pub async fn repository(&self) -> Repository {
        self.repository.lock().await.clone()
    }

    /// Current sync state
    pub async fn state(&self) -> SyncState {
        self.state.lock().await.clone()
    }

    /// When the board was last loaded or saved to the cloud
    pub async fn last_sync(&self) -> Option<DateTime<Utc>> {
        *self.last_sync.lock().await
    }

    /// Checks if a refresh is currently in progress.
    pub async fn is_refreshing(&self) -> bool {
        *self.refresh_in_progress.lock().await
    }

    pub async fn stats(&self) -> ItemStats {
        self.repository.lock().await.stats()
    }

    /// Change the type filter and recompute the filtered view
    pub async fn set_filter(&self, filter: FilterType) -> Vec<Item> {
        let mut repo = self.repository.lock().await;
        repo.set_filter(filter);
        repo.filtered_items().to_vec()
    }

    /// Change the search text and recompute the filtered view
    pub async fn set_search(&self, search: &str) -> Vec<Item> {
        let mut repo = self.repository.lock().await;
        repo.set_search(search);
        repo.filtered_items().to_vec()
    }

    /// A fresh, unused item id derived from the current time
    pub async fn new_item_id(&self) -> i64 {
        self.repository.lock().await.unused_id(datetime::now_millis())
    }

    /// What the simulated cloud last received, if anything
    pub async fn cloud_snapshot(&self) -> anyhow::Result<Option<CloudSnapshot>> {
        CloudSnapshot::load(self.backends.local.storage()).await
    }

    /// Run [`SyncService::refresh`] every `period`, reporting each result on `events`.
    ///
    /// The first refresh happens one full period after the call; the caller
    /// does the initial load itself. The task stops when `events` is closed.
    pub fn spawn_auto_refresh(&self, period: Duration, events: mpsc::UnboundedSender<SyncEvent>) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let event = match service.refresh().await {
                    Ok(outcome) => SyncEvent::Refreshed(outcome),
                    Err(e) => {
                        warn!("⚠️  Auto-refresh failed: {e:#}");
                        SyncEvent::RefreshFailed(format!("{e:#}"))
                    }
                };
                if events.send(event).is_err() {
                    break;
                }
            }
        })
    }

    async fn set_state(&self, state: SyncState) {
        *self.state.lock().await = state;
    }

    async fn mark_synced_now(&self) {
        *self.last_sync.lock().await = Some(Utc::now());
    }
}
