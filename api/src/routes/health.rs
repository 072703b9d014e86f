use actix_web::{web, HttpResponse};

use crate::app::AppState;

/// Handler for GET /health
///
/// Reports 503 while the revocation store is unreachable, since every
/// verification would fail.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store_healthy = state.token_service.store_healthy().await;

    let body = serde_json::json!({
        "status": if store_healthy { "healthy" } else { "degraded" },
        "service": "sigil",
        "version": env!("CARGO_PKG_VERSION"),
        "store": if store_healthy { "up" } else { "down" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if store_healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
