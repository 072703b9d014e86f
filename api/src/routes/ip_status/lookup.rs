use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::IpStatusEntry;
use crate::handlers::handle_access_list_error;

/// Handler for GET /api/v1/ip-status/{ip}
///
/// Unlisted addresses report status `-1`.
///
/// ## Errors
/// - 400 Bad Request: Path segment is not an IP address
/// - 503 Service Unavailable: Access list store unreachable
pub async fn get_ip_status(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let ip = path.into_inner();

    match state.access_list.status_of(&ip).await {
        Ok(status) => HttpResponse::Ok().json(IpStatusEntry::new(ip, status)),
        Err(error) => handle_access_list_error(&error),
    }
}
