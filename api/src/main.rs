use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use sigil_api::{create_app, telemetry, AppState};
use sigil_core::repositories::{
    IpStatusStore, MemoryIpStatusStore, MemoryRevocationStore, RevocationStore,
};
use sigil_core::services::token::{
    Rs256KeyManager, RevocationSweeper, SweeperConfig, TokenService, TokenServiceConfig,
};
use sigil_core::services::AccessListService;
use sigil_infra::cache::{RedisClient, RedisIpStatusStore, RedisRevocationStore};
use sigil_shared::{AppConfig, StoreKind};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;

    telemetry::init_tracing(&config.logging).context("Failed to initialise logging")?;

    info!("Starting Sigil token service ({})", config.environment);

    // Refuse to start without a usable key pair
    let keys =
        Rs256KeyManager::from_config(&config.auth.keys).context("Failed to load key pair")?;

    let (store, ip_store): (Arc<dyn RevocationStore>, Arc<dyn IpStatusStore>) =
        match config.cache.store {
            StoreKind::Redis => {
                let client = RedisClient::new(config.cache.clone())
                    .await
                    .context("Failed to connect to Redis")?;
                (
                    Arc::new(RedisRevocationStore::new(client.clone())),
                    Arc::new(RedisIpStatusStore::new(client)),
                )
            }
            StoreKind::Memory => {
                info!("Using in-memory stores; revocations and statuses are lost on restart");
                let store = Arc::new(MemoryRevocationStore::new());
                Arc::new(RevocationSweeper::new(store.clone(), SweeperConfig::default()))
                    .start_background_task();
                (store, Arc::new(MemoryIpStatusStore::new()))
            }
        };

    let service_config = TokenServiceConfig::from(&config.auth.token);
    info!(
        "Tokens expire after {}s (leeway {}s, store timeout {}ms)",
        service_config.expiry_seconds,
        service_config.leeway_seconds,
        service_config.store_timeout.as_millis()
    );

    let access_list = Arc::new(AccessListService::new(ip_store, service_config.store_timeout));
    let token_service = Arc::new(TokenService::new(store, keys, service_config));
    let app_state = web::Data::new(AppState::new(token_service, access_list));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server error")
}
