use anyhow::{Context, Result};
use log::{error, info, warn};

use super::{RefreshOutcome, SyncService, SyncState};
use crate::backend::DataSource;
use crate::codec;
use crate::item::Item;

impl SyncService {
    /// Reload the board through the fallback chain.
    ///
    /// The cloud is tried first, then the local backup, then the demo
    /// dataset. A list that came from the cloud is also written to the local
    /// backup. On success the repository holds exactly the loaded items; on
    /// error the repository is left untouched and the state becomes
    /// [`SyncState::SyncFailed`].
    ///
    /// Only one refresh runs at a time; a call made while another is running
    /// returns [`RefreshOutcome::AlreadyRunning`] immediately.
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        {
            let mut guard = self.refresh_in_progress.lock().await;
            if *guard {
                return Ok(RefreshOutcome::AlreadyRunning);
            }
            *guard = true;
        }

        info!("🔄 Starting sync...");
        self.set_state(SyncState::Syncing).await;

        let result = match self.load_from_chain().await {
            Ok((source, items)) => {
                let count = items.len();
                self.repository.lock().await.replace_items(items);
                self.mark_synced_now().await;
                self.set_state(SyncState::Synced { source }).await;
                info!("✅ Loaded {count} items from {source}");
                Ok(RefreshOutcome::Loaded { source, count })
            }
            Err(e) => {
                error!("❌ Sync failed: {e:#}");
                self.set_state(SyncState::SyncFailed {
                    message: format!("{e:#}"),
                })
                .await;
                Err(e)
            }
        };

        *self.refresh_in_progress.lock().await = false;
        result
    }

    /// Walk the loaders in order and decode the first text with usable records.
    ///
    /// Text whose records all fail to decode is skipped like a missing one, so
    /// a corrupt cloud file never overwrites the backup.
    async fn load_from_chain(&self) -> Result<(DataSource, Vec<Item>)> {
        for loader in self.backends.loaders() {
            let source = loader.source();
            let text = loader
                .load()
                .await
                .with_context(|| format!("Failed to load from {source}"))?;

            let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
                info!("Nothing from {source}, falling back");
                continue;
            };

            let decoded = codec::decode_report(&text);
            if decoded.is_unusable() {
                warn!(
                    "⚠️  No usable records from {source} ({} dropped), falling back",
                    decoded.skipped
                );
                continue;
            }

            let items = decoded.items;
            if source == DataSource::Cloud {
                self.backends
                    .local
                    .save_items(&items)
                    .await
                    .context("Failed to write local backup")?;
            }
            return Ok((source, items));
        }

        anyhow::bail!("No data source returned a board")
    }
}
