//! Tests for the in-memory access list store

use crate::domain::entities::ip_status::{IpStatus, IpStatusEntry};
use crate::repositories::{IpStatusStore, MemoryIpStatusStore};

#[tokio::test]
async fn test_set_many_and_get() {
    let store = MemoryIpStatusStore::new();

    store
        .set_many(&[
            IpStatusEntry::new("10.0.0.1", IpStatus::Blocked),
            IpStatusEntry::new("10.0.0.2", IpStatus::Trusted),
        ])
        .await
        .unwrap();

    assert_eq!(store.get("10.0.0.1").await.unwrap(), Some(IpStatus::Blocked));
    assert_eq!(store.get("10.0.0.2").await.unwrap(), Some(IpStatus::Trusted));
    assert_eq!(store.get("10.0.0.3").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_many_overwrites() {
    let store = MemoryIpStatusStore::new();
    store
        .set_many(&[IpStatusEntry::new("10.0.0.1", IpStatus::Blocked)])
        .await
        .unwrap();

    store
        .set_many(&[IpStatusEntry::new("10.0.0.1", IpStatus::None)])
        .await
        .unwrap();

    assert_eq!(store.get("10.0.0.1").await.unwrap(), Some(IpStatus::None));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_list() {
    let store = MemoryIpStatusStore::new();
    assert!(store.list().await.unwrap().is_empty());

    store
        .set_many(&[
            IpStatusEntry::new("10.0.0.1", IpStatus::Blocked),
            IpStatusEntry::new("::1", IpStatus::Trusted),
        ])
        .await
        .unwrap();

    let mut entries = store.list().await.unwrap();
    entries.sort_by(|a, b| a.ip.cmp(&b.ip));
    assert_eq!(
        entries,
        vec![
            IpStatusEntry::new("10.0.0.1", IpStatus::Blocked),
            IpStatusEntry::new("::1", IpStatus::Trusted),
        ]
    );
}
