#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lostfound::backend::{BackendError, BackendSet, CloudBackend, CloudPublisher, LocalBackend, TextFetcher};
use lostfound::item::{Item, ItemType, NewItem};
use lostfound::storage::LocalStorage;
use lostfound::sync::SyncService;

/// Fetcher that hands out whatever text it currently holds
#[derive(Default)]
pub struct FakeFetcher {
    body: Mutex<Option<String>>,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn serving(body: &str) -> Self {
        Self {
            body: Mutex::new(Some(body.to_string())),
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn set_body(&self, body: Option<&str>) {
        *self.body.lock().unwrap() = body.map(str::to_string);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextFetcher for FakeFetcher {
    async fn fetch(&self) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.body.lock().unwrap().clone()
    }
}

/// Publisher that records every upload and can be told to fail
#[derive(Default)]
pub struct FakePublisher {
    fail: bool,
    uploads: Mutex<Vec<String>>,
}

impl FakePublisher {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl CloudPublisher for FakePublisher {
    async fn publish(&self, text: &str) -> Result<(), BackendError> {
        if self.fail {
            return Err(BackendError::Network("connection refused".to_string()));
        }
        self.uploads.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub service: SyncService,
    pub storage: LocalStorage,
    pub fetcher: Arc<FakeFetcher>,
    pub publisher: Arc<FakePublisher>,
}

/// Sync service over fake cloud endpoints and a fresh in-memory store
pub async fn harness(fetcher: FakeFetcher, publisher: FakePublisher) -> Harness {
    let storage = LocalStorage::in_memory().await.unwrap();
    let fetcher = Arc::new(fetcher);
    let publisher = Arc::new(publisher);

    let cloud = CloudBackend::new(fetcher.clone(), publisher.clone());
    let backends = BackendSet::new(Arc::new(cloud), LocalBackend::new(storage.clone()));

    Harness {
        service: SyncService::new(backends),
        storage,
        fetcher,
        publisher,
    }
}

pub fn sample_item(id: i64, item_type: ItemType, name: &str) -> Item {
    NewItem {
        item_type,
        name: name.to_string(),
        location: "Main Hall".to_string(),
        date: "2024-03-02".to_string(),
        description: "Left near the stairs".to_string(),
        reporter_name: "Dana".to_string(),
        contact: "dana@campus.edu".to_string(),
    }
    .into_item(id, Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap())
    .unwrap()
}
