//! Cloud backend: remote reads through a [`TextFetcher`], writes through a
//! [`CloudPublisher`]. Failures never escape; they become "nothing loaded"
//! or "not saved".

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use super::{Backend, BackendError, CloudPublisher, DataSource, TextFetcher};

pub struct CloudBackend {
    fetcher: Arc<dyn TextFetcher>,
    publisher: Arc<dyn CloudPublisher>,
}

impl CloudBackend {
    pub fn new(fetcher: Arc<dyn TextFetcher>, publisher: Arc<dyn CloudPublisher>) -> Self {
        Self { fetcher, publisher }
    }
}

#[async_trait]
impl Backend for CloudBackend {
    fn source(&self) -> DataSource {
        DataSource::Cloud
    }

    async fn load(&self) -> Result<Option<String>, BackendError> {
        let body = self.fetcher.fetch().await;
        if body.is_none() {
            warn!("⚠️  Cloud unreachable, no board text fetched");
        }
        Ok(body)
    }

    async fn save(&self, text: &str) -> Result<bool, BackendError> {
        match self.publisher.publish(text).await {
            Ok(()) => {
                info!("☁️  Published {} characters to cloud", text.len());
                Ok(true)
            }
            Err(e) => {
                warn!("⚠️  Cloud save failed: {e}");
                Ok(false)
            }
        }
    }
}
