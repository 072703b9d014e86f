//! Tests for the access list service

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::ip_status::{IpStatus, IpStatusEntry};
use crate::errors::{AccessListError, StoreError};
use crate::repositories::{IpStatusStore, MemoryIpStatusStore};
use crate::services::access_list::AccessListService;

type TestService = AccessListService<Arc<MemoryIpStatusStore>>;

fn create_test_service() -> (TestService, Arc<MemoryIpStatusStore>) {
    let store = Arc::new(MemoryIpStatusStore::new());
    let service = AccessListService::new(store.clone(), Duration::from_millis(500));
    (service, store)
}

struct FailingStore;

#[async_trait]
impl IpStatusStore for FailingStore {
    async fn set_many(&self, _entries: &[IpStatusEntry]) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get(&self, _ip: &str) -> Result<Option<IpStatus>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list(&self) -> Result<Vec<IpStatusEntry>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

struct HangingStore;

#[async_trait]
impl IpStatusStore for HangingStore {
    async fn set_many(&self, _entries: &[IpStatusEntry]) -> Result<(), StoreError> {
        std::future::pending().await
    }

    async fn get(&self, _ip: &str) -> Result<Option<IpStatus>, StoreError> {
        std::future::pending().await
    }

    async fn list(&self) -> Result<Vec<IpStatusEntry>, StoreError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn test_set_and_read_statuses() {
    let (service, _store) = create_test_service();

    let written = service
        .set_statuses(vec![
            IpStatusEntry::new("10.0.0.1", IpStatus::Blocked),
            IpStatusEntry::new("10.0.0.2", IpStatus::Trusted),
        ])
        .await
        .unwrap();

    assert_eq!(written, 2);
    assert_eq!(service.status_of("10.0.0.1").await.unwrap(), IpStatus::Blocked);
    assert_eq!(service.status_of("10.0.0.2").await.unwrap(), IpStatus::Trusted);
    assert_eq!(service.status_of("10.0.0.3").await.unwrap(), IpStatus::None);
}

#[tokio::test]
async fn test_addresses_are_canonical() {
    let (service, store) = create_test_service();

    service
        .set_statuses(vec![IpStatusEntry::new(" 0:0:0:0:0:0:0:1 ", IpStatus::Blocked)])
        .await
        .unwrap();

    assert_eq!(store.get("::1").await.unwrap(), Some(IpStatus::Blocked));
    let addr: IpAddr = "::1".parse().unwrap();
    assert_eq!(service.status_of_addr(addr).await.unwrap(), IpStatus::Blocked);
}

#[tokio::test]
async fn test_invalid_address_rejects_whole_batch() {
    let (service, store) = create_test_service();

    let err = service
        .set_statuses(vec![
            IpStatusEntry::new("10.0.0.1", IpStatus::Blocked),
            IpStatusEntry::new("localhost", IpStatus::Blocked),
        ])
        .await
        .unwrap_err();

    assert_eq!(err, AccessListError::InvalidAddress("localhost".to_string()));
    assert_eq!(store.len().await, 0);
    assert!(matches!(
        service.status_of("not-an-ip").await,
        Err(AccessListError::InvalidAddress(_))
    ));
}

#[tokio::test]
async fn test_empty_batch_skips_store() {
    let service = AccessListService::new(FailingStore, Duration::from_millis(500));

    assert_eq!(service.set_statuses(Vec::new()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_later_entry_wins() {
    let (service, _store) = create_test_service();

    service
        .set_statuses(vec![
            IpStatusEntry::new("10.0.0.1", IpStatus::Blocked),
            IpStatusEntry::new("10.0.0.1", IpStatus::Trusted),
        ])
        .await
        .unwrap();

    assert_eq!(service.status_of("10.0.0.1").await.unwrap(), IpStatus::Trusted);
}

#[tokio::test]
async fn test_list_is_sorted() {
    let (service, _store) = create_test_service();
    service
        .set_statuses(vec![
            IpStatusEntry::new("10.0.0.9", IpStatus::Blocked),
            IpStatusEntry::new("10.0.0.1", IpStatus::None),
        ])
        .await
        .unwrap();

    let entries = service.list().await.unwrap();

    assert_eq!(
        entries,
        vec![
            IpStatusEntry::new("10.0.0.1", IpStatus::None),
            IpStatusEntry::new("10.0.0.9", IpStatus::Blocked),
        ]
    );
}

#[tokio::test]
async fn test_store_unavailable() {
    let service = AccessListService::new(FailingStore, Duration::from_millis(500));

    let err = service
        .set_statuses(vec![IpStatusEntry::new("10.0.0.1", IpStatus::Blocked)])
        .await
        .unwrap_err();
    assert!(err.is_retryable());
    assert!(service.status_of("10.0.0.1").await.unwrap_err().is_retryable());
    assert!(service.list().await.unwrap_err().is_retryable());
}

#[tokio::test(start_paused = true)]
async fn test_store_timeout() {
    let service = AccessListService::new(HangingStore, Duration::from_millis(500));

    match service.list().await {
        Err(AccessListError::StoreUnavailable { message }) => assert!(message.contains("500ms")),
        other => panic!("expected StoreUnavailable, got {:?}", other),
    }
}
