use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{IssueTokenRequest, IssueTokenResponse};
use crate::handlers::handle_token_error;

/// Handler for POST /api/v1/tokens
///
/// # Request Body
///
/// ```json
/// {
///     "subject": "user-42"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9...",
///     "token_id": "5f0c6b2e9a0d4c1b8e7f3a2d1c0b9a88",
///     "issued_at": 1700000000,
///     "expires_at": 1700003600,
///     "expires_in": 3600
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Empty subject
/// - 500 Internal Server Error: Signing failure
pub async fn issue_token(
    state: web::Data<AppState>,
    request: web::Json<IssueTokenRequest>,
) -> HttpResponse {
    match state.token_service.issue(&request.subject) {
        Ok(issued) => HttpResponse::Created().json(IssueTokenResponse::from(issued)),
        Err(error) => handle_token_error(&error),
    }
}
