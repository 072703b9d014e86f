use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{VerifyTokenRequest, VerifyTokenResponse};
use crate::handlers::handle_token_error;

/// Handler for POST /api/v1/tokens/verify
///
/// Returns the claims of a valid token.
///
/// ## Errors
/// - 400 Bad Request: Malformed token
/// - 401 Unauthorized: Bad signature, expired, or revoked
/// - 503 Service Unavailable: Revocation store unreachable (with `Retry-After`)
pub async fn verify_token(
    state: web::Data<AppState>,
    request: web::Json<VerifyTokenRequest>,
) -> HttpResponse {
    match state.token_service.verify(&request.token).await {
        Ok(claims) => HttpResponse::Ok().json(VerifyTokenResponse::from(claims)),
        Err(error) => handle_token_error(&error),
    }
}
