use anyhow::{Context, Result};
use log::{error, info, warn};

use super::{SyncService, SyncState};
use crate::codec;
use crate::item::Item;

impl SyncService {
    /// Add a new item and save the whole board.
    ///
    /// The item is appended to the repository before anything is written and
    /// stays there whatever happens next. The full list then goes to the
    /// cloud, and the local backup is rewritten either way.
    ///
    /// # Returns
    /// `true` when the cloud accepted the board, `false` when only the local
    /// backup has it
    ///
    /// # Errors
    /// Returns an error if the local backup cannot be written; the state
    /// becomes [`SyncState::SaveFailed`]
    pub async fn persist(&self, item: Item) -> Result<bool> {
        self.set_state(SyncState::Saving).await;
        info!("💾 Saving item {} ({})", item.id, item.name);

        let snapshot = {
            let mut repo = self.repository.lock().await;
            repo.append(item);
            repo.items().to_vec()
        };

        let text = match codec::encode(&snapshot) {
            Ok(text) => text,
            Err(e) => {
                error!("❌ Failed to encode board: {e:#}");
                self.set_state(SyncState::SaveFailed {
                    message: format!("{e:#}"),
                })
                .await;
                return Err(e);
            }
        };
        let saved_to_cloud = match self.backends.cloud.save(&text).await {
            Ok(saved) => saved,
            Err(e) => {
                warn!("⚠️  Cloud save error: {e}");
                false
            }
        };

        if let Err(e) = self.backends.local.save_items(&snapshot).await {
            error!("❌ Failed to write local backup: {e}");
            self.set_state(SyncState::SaveFailed { message: e.to_string() }).await;
            return Err(e).context("Failed to write local backup");
        }

        if saved_to_cloud {
            self.mark_synced_now().await;
            self.set_state(SyncState::Saved).await;
            info!("✅ Saved {} items to cloud", snapshot.len());
        } else {
            self.set_state(SyncState::SavedLocally).await;
            warn!("⚠️  Saved {} items locally only", snapshot.len());
        }

        Ok(saved_to_cloud)
    }
}
