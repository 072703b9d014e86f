use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::IpStatusEntry;
use crate::handlers::handle_access_list_error;

/// Handler for POST /api/v1/ip-status
///
/// # Request Body
///
/// Status codes are `-1` (none), `0` (trusted) and `1` (blocked).
/// ```json
/// [
///     { "ip": "203.0.113.7", "status": 1 },
///     { "ip": "10.0.0.2", "status": 0 }
/// ]
/// ```
///
/// # Response
///
/// ## Success (204 No Content)
///
/// ## Errors
/// - 400 Bad Request: Unknown status code or an entry that is not an IP address;
///   nothing is written
/// - 503 Service Unavailable: Access list store unreachable
pub async fn set_ip_statuses(
    state: web::Data<AppState>,
    request: web::Json<Vec<IpStatusEntry>>,
) -> HttpResponse {
    match state.access_list.set_statuses(request.into_inner()).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(error) => handle_access_list_error(&error),
    }
}
