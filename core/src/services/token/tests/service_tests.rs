//! Unit tests for token service

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::clock::ManualClock;
use crate::errors::TokenError;
use crate::repositories::{MemoryRevocationStore, RevocationStore};
use crate::services::token::TokenService;

use super::{
    create_test_service, foreign_service, service_with_store, test_config, test_keys,
    FailingStore, HangingStore, T0,
};

#[tokio::test]
async fn test_issue_and_verify() {
    let (service, _store, clock) = create_test_service();

    let issued = service.issue("user-42").unwrap();
    assert_eq!(issued.claims.sub, "user-42");
    assert_eq!(issued.claims.iat, T0);
    assert_eq!(issued.claims.exp, T0 + 3600);
    assert_eq!(issued.expires_in(), 3600);
    assert_eq!(issued.token.split('.').count(), 3);

    clock.advance(10);
    let claims = service.verify(&issued.token).await.unwrap();

    assert_eq!(claims, issued.claims);
}

#[tokio::test]
async fn test_user_session_lifecycle() {
    let (service, _store, clock) = create_test_service();

    let issued = service.issue("user-42").unwrap();

    clock.advance(10);
    assert_eq!(service.verify(&issued.token).await.unwrap().subject(), "user-42");

    service
        .revoke(issued.claims.token_id(), issued.claims.exp)
        .await
        .unwrap();
    assert_eq!(
        service.verify(&issued.token).await.unwrap_err(),
        TokenError::TokenRevoked
    );

    // Expiry is checked before revocation
    clock.set(issued.claims.exp);
    assert_eq!(
        service.verify(&issued.token).await.unwrap_err(),
        TokenError::TokenExpired
    );
}

#[tokio::test]
async fn test_issue_rejects_blank_subject() {
    let (service, _store, _clock) = create_test_service();

    assert_eq!(service.issue("").unwrap_err(), TokenError::InvalidSubject);
    assert_eq!(service.issue("   ").unwrap_err(), TokenError::InvalidSubject);
}

#[tokio::test]
async fn test_issue_does_not_touch_store() {
    let (service, _clock) = service_with_store(FailingStore);

    let issued = service.issue("user-42").unwrap();

    assert!(!issued.token.is_empty());
}

#[tokio::test]
async fn test_token_ids_are_unique() {
    let (service, _store, _clock) = create_test_service();

    let ids: HashSet<String> = (0..200)
        .map(|_| service.issue("user-42").unwrap().claims.jti)
        .collect();

    assert_eq!(ids.len(), 200);
}

#[tokio::test]
async fn test_expiry_boundary() {
    let (service, _store, clock) = create_test_service();
    let issued = service.issue("user-42").unwrap();

    clock.set(issued.claims.exp - 1);
    assert!(service.verify(&issued.token).await.is_ok());

    clock.set(issued.claims.exp);
    assert_eq!(
        service.verify(&issued.token).await.unwrap_err(),
        TokenError::TokenExpired
    );
}

#[tokio::test]
async fn test_leeway_widens_acceptance() {
    let clock = ManualClock::new(T0);
    let service = TokenService::with_clock(
        MemoryRevocationStore::new(),
        test_keys(),
        test_config().with_leeway_seconds(30),
        clock.clone(),
    );
    let issued = service.issue("user-42").unwrap();

    clock.set(issued.claims.exp + 29);
    assert!(service.verify(&issued.token).await.is_ok());

    clock.set(issued.claims.exp + 30);
    assert_eq!(
        service.verify(&issued.token).await.unwrap_err(),
        TokenError::TokenExpired
    );
}

#[tokio::test]
async fn test_token_from_other_key_is_rejected() {
    let (service, _store, _clock) = create_test_service();

    let issued = foreign_service().issue("user-42").unwrap();

    assert_eq!(
        service.verify(&issued.token).await.unwrap_err(),
        TokenError::InvalidSignature
    );
}

#[tokio::test]
async fn test_malformed_tokens() {
    let (service, _store, _clock) = create_test_service();

    for token in ["", "abc", "a.b", "a.b.c.d", "..", "a..c", "!!!.???.***"] {
        assert_eq!(
            service.verify(token).await.unwrap_err(),
            TokenError::MalformedToken,
            "token {:?}",
            token
        );
    }
}

#[tokio::test]
async fn test_token_cut_inside_claims_segment_is_malformed() {
    let (service, _store, _clock) = create_test_service();
    let issued = service.issue("user-42").unwrap();

    let parts: Vec<&str> = issued.token.split('.').collect();
    let cut = parts[0].len() + 1 + parts[1].len() / 2;

    assert_eq!(
        service.verify(&issued.token[..cut]).await.unwrap_err(),
        TokenError::MalformedToken
    );
    assert_eq!(
        service.verify(&format!("{}..{}", parts[0], parts[2])).await.unwrap_err(),
        TokenError::MalformedToken
    );
}

#[tokio::test]
async fn test_shortened_claims_segment_fails_signature() {
    let (service, _store, _clock) = create_test_service();
    let issued = service.issue("user-42").unwrap();

    let parts: Vec<&str> = issued.token.split('.').collect();
    let shortened = format!("{}.{}.{}", parts[0], &parts[1][..parts[1].len() / 2], parts[2]);

    assert_eq!(
        service.verify(&shortened).await.unwrap_err(),
        TokenError::InvalidSignature
    );
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let (service, store, _clock) = create_test_service();
    let issued = service.issue("user-42").unwrap();

    service.revoke(&issued.claims.jti, issued.claims.exp).await.unwrap();
    service.revoke(&issued.claims.jti, issued.claims.exp).await.unwrap();

    assert_eq!(store.len().await, 1);
    assert_eq!(
        service.verify(&issued.token).await.unwrap_err(),
        TokenError::TokenRevoked
    );
}

#[tokio::test]
async fn test_revoke_entry_lives_until_expiry() {
    let (service, store, clock) = create_test_service();
    let issued = service.issue("user-42").unwrap();

    clock.advance(600);
    service.revoke(&issued.claims.jti, issued.claims.exp).await.unwrap();

    let ttl = store.ttl(&issued.claims.jti).await.unwrap();
    assert!(ttl.as_secs() <= 3000 && ttl.as_secs() >= 2999);

    // Marker is the revocation time
    assert_eq!(
        store.get(&issued.claims.jti).await.unwrap(),
        Some((T0 + 600).to_string())
    );
}

#[tokio::test]
async fn test_revoke_ttl_is_capped_at_token_lifetime() {
    let (service, store, _clock) = create_test_service();

    service.revoke("abc", i64::MAX).await.unwrap();

    let ttl = store.ttl("abc").await.unwrap();
    assert!(ttl.as_secs() <= 3600 && ttl.as_secs() >= 3599);
    assert!(service.is_revoked("abc").await.unwrap());
}

#[tokio::test]
async fn test_revoke_ttl_cap_includes_leeway() {
    let store = Arc::new(MemoryRevocationStore::new());
    let service = TokenService::with_clock(
        store.clone(),
        test_keys(),
        test_config().with_leeway_seconds(30),
        ManualClock::new(T0),
    );

    service.revoke("abc", T0 + 86_400).await.unwrap();

    let ttl = store.ttl("abc").await.unwrap();
    assert!(ttl.as_secs() <= 3630 && ttl.as_secs() >= 3629);
}

#[tokio::test]
async fn test_revoke_expired_token_skips_store() {
    let (service, store, clock) = create_test_service();
    let issued = service.issue("user-42").unwrap();

    clock.set(issued.claims.exp);
    service.revoke(&issued.claims.jti, issued.claims.exp).await.unwrap();
    service.revoke(&issued.claims.jti, T0 - 100).await.unwrap();

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_revoke_rejects_empty_token_id() {
    let (service, _store, _clock) = create_test_service();

    assert_eq!(
        service.revoke("", T0 + 60).await.unwrap_err(),
        TokenError::MalformedToken
    );
}

#[tokio::test]
async fn test_revoke_unknown_token_id() {
    let (service, _store, _clock) = create_test_service();

    service.revoke("never-issued", T0 + 60).await.unwrap();

    assert!(service.is_revoked("never-issued").await.unwrap());
}

#[tokio::test]
async fn test_revoke_token() {
    let (service, _store, _clock) = create_test_service();
    let issued = service.issue("user-42").unwrap();

    let claims = service.revoke_token(&issued.token).await.unwrap();
    assert_eq!(claims.jti, issued.claims.jti);

    assert!(service.is_revoked(&issued.claims.jti).await.unwrap());
    assert_eq!(
        service.verify(&issued.token).await.unwrap_err(),
        TokenError::TokenRevoked
    );
}

#[tokio::test]
async fn test_revoke_token_requires_valid_signature() {
    let (service, store, _clock) = create_test_service();
    let issued = foreign_service().issue("user-42").unwrap();

    assert_eq!(
        service.revoke_token(&issued.token).await.unwrap_err(),
        TokenError::InvalidSignature
    );
    assert_eq!(
        service.revoke_token("garbage").await.unwrap_err(),
        TokenError::MalformedToken
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_store_unavailable() {
    let (service, clock) = service_with_store(FailingStore);
    let issued = service.issue("user-42").unwrap();

    let err = service.verify(&issued.token).await.unwrap_err();
    assert!(matches!(err, TokenError::StoreUnavailable { .. }));
    assert!(err.is_retryable());

    let err = service.revoke(&issued.claims.jti, issued.claims.exp).await.unwrap_err();
    assert!(matches!(err, TokenError::StoreUnavailable { .. }));

    assert!(!service.store_healthy().await);

    // Checks that precede the store lookup still decide
    clock.set(issued.claims.exp);
    assert_eq!(
        service.verify(&issued.token).await.unwrap_err(),
        TokenError::TokenExpired
    );
    assert_eq!(
        service.verify("garbage").await.unwrap_err(),
        TokenError::MalformedToken
    );
}

#[tokio::test(start_paused = true)]
async fn test_store_timeout() {
    let (service, _clock) = service_with_store(HangingStore);
    let issued = service.issue("user-42").unwrap();

    match service.verify(&issued.token).await {
        Err(TokenError::StoreUnavailable { message }) => assert!(message.contains("500ms")),
        other => panic!("expected StoreUnavailable, got {:?}", other),
    }

    assert!(matches!(
        service.revoke(&issued.claims.jti, issued.claims.exp).await,
        Err(TokenError::StoreUnavailable { .. })
    ));
    assert!(!service.store_healthy().await);
}

#[tokio::test]
async fn test_store_healthy() {
    let (service, _store, _clock) = create_test_service();

    assert!(service.store_healthy().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_verification() {
    let (service, _store, _clock) = create_test_service();
    let service = Arc::new(service);

    let tokens: Vec<String> = (0..32)
        .map(|i| service.issue(&format!("user-{}", i)).unwrap().token)
        .collect();

    let handles: Vec<_> = tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            let service = service.clone();
            tokio::spawn(async move {
                let claims = service.verify(&token).await.unwrap();
                assert_eq!(claims.sub, format!("user-{}", i));
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
}
