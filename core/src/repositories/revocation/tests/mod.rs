//! Tests for the in-memory revocation store

use std::sync::Arc;
use std::time::Duration;

use crate::repositories::{MemoryRevocationStore, RevocationStore};

#[tokio::test]
async fn test_set_and_get() {
    let store = MemoryRevocationStore::new();

    store.set_with_ttl("abc", "1700000000", 60).await.unwrap();

    assert_eq!(store.get("abc").await.unwrap(), Some("1700000000".to_string()));
    assert_eq!(store.get("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_delete() {
    let store = MemoryRevocationStore::new();
    store.set_with_ttl("abc", "1", 60).await.unwrap();

    assert!(store.delete("abc").await.unwrap());
    assert!(!store.delete("abc").await.unwrap());
    assert_eq!(store.get("abc").await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_entries_expire() {
    let store = MemoryRevocationStore::new();
    store.set_with_ttl("abc", "1", 10).await.unwrap();

    tokio::time::advance(Duration::from_secs(9)).await;
    assert!(store.get("abc").await.unwrap().is_some());

    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(store.get("abc").await.unwrap().is_none());

    // Lapsed but still held until purged
    assert_eq!(store.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_purge_expired() {
    let store = MemoryRevocationStore::new();
    store.set_with_ttl("short", "1", 5).await.unwrap();
    store.set_with_ttl("long", "1", 500).await.unwrap();

    tokio::time::advance(Duration::from_secs(6)).await;

    assert_eq!(store.purge_expired().await.unwrap(), 1);
    assert_eq!(store.len().await, 1);
    assert!(store.get("long").await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_overwrite_resets_ttl() {
    let store = MemoryRevocationStore::new();
    store.set_with_ttl("abc", "1", 100).await.unwrap();
    store.set_with_ttl("abc", "2", 30).await.unwrap();

    assert_eq!(store.get("abc").await.unwrap(), Some("2".to_string()));
    assert_eq!(store.ttl("abc").await, Some(Duration::from_secs(30)));
}

#[tokio::test]
async fn test_shared_handle() {
    let store = Arc::new(MemoryRevocationStore::new());
    let handle: Arc<dyn RevocationStore> = store.clone();

    handle.set_with_ttl("abc", "1", 60).await.unwrap();

    assert!(store.get("abc").await.unwrap().is_some());
    assert!(handle.ping().await.is_ok());
}
