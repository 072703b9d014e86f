//! End-to-end tests for the token engine through the public API

use std::sync::Arc;

use sigil_core::errors::TokenError;
use sigil_core::repositories::MemoryRevocationStore;
use sigil_core::services::token::{Rs256KeyManager, TokenService, TokenServiceConfig};
use sigil_shared::{AuthConfig, KeyConfig, TokenConfig};

fn fixture(name: &str) -> std::path::PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name].iter().collect()
}

#[tokio::test]
async fn test_engine_from_configuration() {
    let auth = AuthConfig {
        keys: KeyConfig {
            private_key_path: fixture("private_key.pem"),
            public_key_path: fixture("public_key.pem"),
        },
        token: TokenConfig::with_expiry(900),
    };

    let keys = Rs256KeyManager::from_config(&auth.keys).unwrap();
    let store = Arc::new(MemoryRevocationStore::new());
    let service = TokenService::new(store.clone(), keys, TokenServiceConfig::from(&auth.token));

    let issued = service.issue("user-42").unwrap();
    assert_eq!(issued.expires_in(), 900);

    let claims = service.verify(&issued.token).await.unwrap();
    assert_eq!(claims.subject(), "user-42");

    service.revoke_token(&issued.token).await.unwrap();
    assert_eq!(
        service.verify(&issued.token).await.unwrap_err(),
        TokenError::TokenRevoked
    );
    assert_eq!(store.len().await, 1);
}

#[test]
fn test_startup_fails_on_missing_keys() {
    let keys = KeyConfig {
        private_key_path: fixture("missing_private.pem"),
        public_key_path: fixture("public_key.pem"),
    };

    let err = Rs256KeyManager::from_config(&keys).unwrap_err();

    assert_eq!(err.code(), "KEY_LOAD_FAILURE");
    assert!(!err.is_retryable());
}
