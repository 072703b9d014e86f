use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::handle_access_list_error;

/// Handler for GET /api/v1/ip-status
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// [
///     { "ip": "10.0.0.2", "status": 0 },
///     { "ip": "203.0.113.7", "status": 1 }
/// ]
/// ```
///
/// ## Errors
/// - 503 Service Unavailable: Access list store unreachable
pub async fn list_ip_statuses(state: web::Data<AppState>) -> HttpResponse {
    match state.access_list.list().await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(error) => handle_access_list_error(&error),
    }
}
