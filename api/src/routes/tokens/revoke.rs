use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::RevokeTokenRequest;
use crate::handlers::handle_token_error;

/// Handler for POST /api/v1/tokens/revoke
///
/// # Request Body
///
/// Either the id and expiry reported at issue time:
/// ```json
/// {
///     "token_id": "5f0c6b2e9a0d4c1b8e7f3a2d1c0b9a88",
///     "expires_at": 1700003600
/// }
/// ```
///
/// or the token itself, which must carry a valid signature:
/// ```json
/// {
///     "token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9..."
/// }
/// ```
///
/// # Response
///
/// ## Success (204 No Content)
///
/// Revoking an already revoked or expired token also succeeds.
///
/// ## Errors
/// - 400 Bad Request: Empty token id or malformed token
/// - 401 Unauthorized: Token signature invalid
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn revoke_token(
    state: web::Data<AppState>,
    request: web::Json<RevokeTokenRequest>,
) -> HttpResponse {
    let result = match request.into_inner() {
        RevokeTokenRequest::ById {
            token_id,
            expires_at,
        } => state.token_service.revoke(&token_id, expires_at).await,
        RevokeTokenRequest::ByToken { token } => {
            state.token_service.revoke_token(&token).await.map(|_| ())
        }
    };

    match result {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_token_error(&error),
    }
}
