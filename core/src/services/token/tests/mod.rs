//! Tests for the token engine

mod service_tests;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::clock::ManualClock;
use crate::errors::StoreError;
use crate::repositories::{MemoryRevocationStore, RevocationStore};
use crate::services::token::{Rs256KeyManager, TokenService, TokenServiceConfig};

pub(super) const PRIVATE_KEY: &str = include_str!("../../../../tests/fixtures/private_key.pem");
pub(super) const PUBLIC_KEY: &str = include_str!("../../../../tests/fixtures/public_key.pem");
pub(super) const OTHER_PRIVATE_KEY: &str =
    include_str!("../../../../tests/fixtures/other_private_key.pem");
pub(super) const OTHER_PUBLIC_KEY: &str =
    include_str!("../../../../tests/fixtures/other_public_key.pem");

/// Fixed start time for engine tests
pub(super) const T0: i64 = 1_700_000_000;

pub(super) fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

pub(super) fn test_keys() -> Rs256KeyManager {
    Rs256KeyManager::from_pem_strings(PRIVATE_KEY, PUBLIC_KEY).unwrap()
}

pub(super) fn other_keys() -> Rs256KeyManager {
    Rs256KeyManager::from_pem_strings(OTHER_PRIVATE_KEY, OTHER_PUBLIC_KEY).unwrap()
}

pub(super) fn test_config() -> TokenServiceConfig {
    TokenServiceConfig::default()
        .with_expiry_seconds(3600)
        .with_leeway_seconds(0)
        .with_store_timeout(Duration::from_millis(500))
}

pub(super) type TestService<S = Arc<MemoryRevocationStore>> = TokenService<S, ManualClock>;

/// Engine over a shared in-memory store at `T0`
pub(super) fn create_test_service() -> (TestService, Arc<MemoryRevocationStore>, ManualClock) {
    let store = Arc::new(MemoryRevocationStore::new());
    let clock = ManualClock::new(T0);
    let service =
        TokenService::with_clock(store.clone(), test_keys(), test_config(), clock.clone());
    (service, store, clock)
}

/// Engine over an arbitrary store at `T0`
pub(super) fn service_with_store<S: RevocationStore>(store: S) -> (TestService<S>, ManualClock) {
    let clock = ManualClock::new(T0);
    let service = TokenService::with_clock(store, test_keys(), test_config(), clock.clone());
    (service, clock)
}

/// Engine signing with a key pair the other engines do not trust
pub(super) fn foreign_service() -> TestService<FailingStore> {
    TokenService::with_clock(FailingStore, other_keys(), test_config(), ManualClock::new(T0))
}

/// Store that refuses every call
pub(super) struct FailingStore;

#[async_trait]
impl RevocationStore for FailingStore {
    async fn get(&self, _token_id: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn set_with_ttl(
        &self,
        _token_id: &str,
        _marker: &str,
        _ttl: u64,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _token_id: &str) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Store that never answers
pub(super) struct HangingStore;

#[async_trait]
impl RevocationStore for HangingStore {
    async fn get(&self, _token_id: &str) -> Result<Option<String>, StoreError> {
        std::future::pending().await
    }

    async fn set_with_ttl(
        &self,
        _token_id: &str,
        _marker: &str,
        _ttl: u64,
    ) -> Result<(), StoreError> {
        std::future::pending().await
    }

    async fn delete(&self, _token_id: &str) -> Result<bool, StoreError> {
        std::future::pending().await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        std::future::pending().await
    }
}
