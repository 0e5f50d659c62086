mod common;

use std::time::Duration;

use common::{harness, sample_item, FakeFetcher, FakePublisher};
use lostfound::backend::DataSource;
use lostfound::codec;
use lostfound::constants::LOCAL_STORAGE_KEY;
use lostfound::item::{FilterType, ItemType};
use lostfound::sync::{RefreshOutcome, SyncEvent, SyncState};
use tokio::sync::mpsc;

#[tokio::test]
async fn test_refresh_falls_back_to_demo_data() {
    let h = harness(FakeFetcher::offline(), FakePublisher::accepting()).await;

    let outcome = h.service.refresh().await.unwrap();
    assert_eq!(
        outcome,
        RefreshOutcome::Loaded {
            source: DataSource::Demo,
            count: 3
        }
    );

    let repo = h.service.repository().await;
    let ids: Vec<i64> = repo.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(
        h.service.state().await,
        SyncState::Synced {
            source: DataSource::Demo
        }
    );

    // Demo data is never written back as a backup
    assert!(h.storage.get(LOCAL_STORAGE_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_refresh_uses_backup_when_cloud_is_down() {
    let h = harness(FakeFetcher::offline(), FakePublisher::accepting()).await;
    let backup = vec![sample_item(42, ItemType::Found, "Umbrella")];
    h.storage
        .put(LOCAL_STORAGE_KEY, &codec::encode_compact(&backup).unwrap())
        .await
        .unwrap();

    let outcome = h.service.refresh().await.unwrap();
    assert_eq!(
        outcome,
        RefreshOutcome::Loaded {
            source: DataSource::Backup,
            count: 1
        }
    );
    assert_eq!(h.service.repository().await.items(), backup.as_slice());
}

#[tokio::test]
async fn test_cloud_load_refreshes_backup() {
    let cloud_items = vec![
        sample_item(10, ItemType::Lost, "Keys"),
        sample_item(11, ItemType::Found, "Scarf"),
    ];
    let h = harness(
        FakeFetcher::serving(&codec::encode(&cloud_items).unwrap()),
        FakePublisher::accepting(),
    )
    .await;

    let outcome = h.service.refresh().await.unwrap();
    assert_eq!(
        outcome,
        RefreshOutcome::Loaded {
            source: DataSource::Cloud,
            count: 2
        }
    );
    assert!(h.service.last_sync().await.is_some());

    let backup = h.storage.get(LOCAL_STORAGE_KEY).await.unwrap().unwrap();
    assert_eq!(codec::decode(&backup), cloud_items);
}

#[tokio::test]
async fn test_bad_cloud_record_does_not_wipe_the_board() {
    let keys = sample_item(10, ItemType::Lost, "Keys");
    let text = format!(
        r#"[{}, {{"id":11,"type":"lost","name":"Pen","date":"2024-03-02"}}]"#,
        serde_json::to_string(&keys).unwrap()
    );
    let h = harness(FakeFetcher::serving(&text), FakePublisher::accepting()).await;
    let backup = vec![sample_item(42, ItemType::Found, "Umbrella")];
    h.storage
        .put(LOCAL_STORAGE_KEY, &codec::encode_compact(&backup).unwrap())
        .await
        .unwrap();

    let outcome = h.service.refresh().await.unwrap();
    assert_eq!(
        outcome,
        RefreshOutcome::Loaded {
            source: DataSource::Cloud,
            count: 1
        }
    );
    assert_eq!(h.service.repository().await.items(), [keys.clone()].as_slice());

    let stored = h.storage.get(LOCAL_STORAGE_KEY).await.unwrap().unwrap();
    assert_eq!(codec::decode(&stored), vec![keys]);
}

#[tokio::test]
async fn test_unusable_cloud_document_keeps_backup() {
    let h = harness(
        FakeFetcher::serving(r#"[{"id":11,"type":"lost","name":"Pen"}]"#),
        FakePublisher::accepting(),
    )
    .await;
    let backup = vec![sample_item(42, ItemType::Found, "Umbrella")];
    let backup_text = codec::encode_compact(&backup).unwrap();
    h.storage.put(LOCAL_STORAGE_KEY, &backup_text).await.unwrap();

    let outcome = h.service.refresh().await.unwrap();
    assert_eq!(
        outcome,
        RefreshOutcome::Loaded {
            source: DataSource::Backup,
            count: 1
        }
    );
    assert_eq!(h.service.repository().await.items(), backup.as_slice());
    assert_eq!(
        h.storage.get(LOCAL_STORAGE_KEY).await.unwrap().as_deref(),
        Some(backup_text.as_str())
    );
}

#[tokio::test]
async fn test_blank_cloud_text_counts_as_absent() {
    let h = harness(FakeFetcher::serving("   \n"), FakePublisher::accepting()).await;

    let outcome = h.service.refresh().await.unwrap();
    assert!(matches!(
        outcome,
        RefreshOutcome::Loaded {
            source: DataSource::Demo,
            ..
        }
    ));
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let cloud_items = vec![sample_item(7, ItemType::Lost, "Laptop charger")];
    let h = harness(
        FakeFetcher::serving(&codec::encode(&cloud_items).unwrap()),
        FakePublisher::accepting(),
    )
    .await;

    h.service.refresh().await.unwrap();
    let first = h.service.repository().await;
    h.service.refresh().await.unwrap();
    let second = h.service.repository().await;

    assert_eq!(first.items(), second.items());
    assert_eq!(h.fetcher.calls(), 2);
}

#[tokio::test]
async fn test_persist_saves_to_cloud_and_backup() {
    let h = harness(FakeFetcher::offline(), FakePublisher::accepting()).await;
    h.service.refresh().await.unwrap();

    let item = sample_item(100, ItemType::Lost, "Keys");
    let saved = h.service.persist(item.clone()).await.unwrap();

    assert!(saved);
    assert_eq!(h.service.state().await, SyncState::Saved);
    let repo = h.service.repository().await;
    assert_eq!(repo.len(), 4);
    assert_eq!(repo.items().last(), Some(&item));

    let uploads = h.publisher.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(codec::decode(&uploads[0]).len(), 4);

    let backup = h.storage.get(LOCAL_STORAGE_KEY).await.unwrap().unwrap();
    assert_eq!(codec::decode(&backup), repo.items());
}

#[tokio::test]
async fn test_persist_keeps_item_when_cloud_rejects() {
    let h = harness(FakeFetcher::offline(), FakePublisher::rejecting()).await;
    h.service.refresh().await.unwrap();

    let saved = h
        .service
        .persist(sample_item(200, ItemType::Found, "Gloves"))
        .await
        .unwrap();

    assert!(!saved);
    assert_eq!(h.service.state().await, SyncState::SavedLocally);
    assert!(h.service.repository().await.contains_id(200));

    let backup = h.storage.get(LOCAL_STORAGE_KEY).await.unwrap().unwrap();
    assert!(codec::decode(&backup).iter().any(|i| i.id == 200));
}

#[tokio::test]
async fn test_persisted_item_survives_next_refresh_from_backup() {
    let h = harness(FakeFetcher::offline(), FakePublisher::rejecting()).await;
    h.service.refresh().await.unwrap();
    h.service
        .persist(sample_item(300, ItemType::Lost, "Headphones"))
        .await
        .unwrap();

    let outcome = h.service.refresh().await.unwrap();
    assert_eq!(
        outcome,
        RefreshOutcome::Loaded {
            source: DataSource::Backup,
            count: 4
        }
    );
}

#[tokio::test]
async fn test_refresh_failure_leaves_repository_untouched() {
    let h = harness(FakeFetcher::offline(), FakePublisher::accepting()).await;
    h.service.refresh().await.unwrap();
    let before = h.service.repository().await;

    h.storage.clone().close().await.unwrap();

    assert!(h.service.refresh().await.is_err());
    assert!(matches!(h.service.state().await, SyncState::SyncFailed { .. }));
    assert_eq!(h.service.repository().await, before);
    assert!(!h.service.is_refreshing().await);
}

#[tokio::test]
async fn test_persist_fails_when_backup_cannot_be_written() {
    let h = harness(FakeFetcher::offline(), FakePublisher::accepting()).await;
    h.service.refresh().await.unwrap();
    h.storage.clone().close().await.unwrap();

    let result = h.service.persist(sample_item(400, ItemType::Lost, "Wallet")).await;

    assert!(result.is_err());
    assert!(matches!(h.service.state().await, SyncState::SaveFailed { .. }));
    // The optimistic append is not rolled back
    assert!(h.service.repository().await.contains_id(400));
}

#[tokio::test]
async fn test_concurrent_refresh_is_rejected() {
    let h = harness(
        FakeFetcher::slow(Duration::from_millis(200)),
        FakePublisher::accepting(),
    )
    .await;

    let svc = h.service.clone();
    let first = tokio::spawn(async move { svc.refresh().await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(h.service.is_refreshing().await);
    assert!(h.service.state().await.is_busy());
    assert_eq!(h.service.refresh().await.unwrap(), RefreshOutcome::AlreadyRunning);

    let outcome = first.await.unwrap().unwrap();
    assert!(matches!(outcome, RefreshOutcome::Loaded { .. }));
    assert!(!h.service.state().await.is_busy());
    assert_eq!(h.fetcher.calls(), 1);
}

#[tokio::test]
async fn test_filter_and_search_apply_to_view() {
    let h = harness(FakeFetcher::offline(), FakePublisher::accepting()).await;
    h.service.refresh().await.unwrap();

    let lost = h.service.set_filter(FilterType::Lost).await;
    assert_eq!(lost.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);

    let hits = h.service.set_search("CASIO").await;
    assert_eq!(hits.iter().map(|i| i.id).collect::<Vec<_>>(), vec![3]);

    // The underlying list is never narrowed
    assert_eq!(h.service.stats().await.total, 3);
}

#[tokio::test]
async fn test_new_item_id_is_unused() {
    let h = harness(FakeFetcher::offline(), FakePublisher::accepting()).await;
    h.service.refresh().await.unwrap();

    let id = h.service.new_item_id().await;
    assert!(!h.service.repository().await.contains_id(id));
}

#[tokio::test]
async fn test_auto_refresh_reports_results() {
    let h = harness(FakeFetcher::offline(), FakePublisher::accepting()).await;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let handle = h.service.spawn_auto_refresh(Duration::from_millis(50), tx);
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        event,
        SyncEvent::Refreshed(RefreshOutcome::Loaded {
            source: DataSource::Demo,
            count: 3
        })
    );
    handle.abort();
}

#[tokio::test]
async fn test_auto_refresh_stops_when_receiver_drops() {
    let h = harness(FakeFetcher::offline(), FakePublisher::accepting()).await;
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);

    let handle = h.service.spawn_auto_refresh(Duration::from_millis(20), tx);
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap();
}
