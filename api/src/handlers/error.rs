use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse,
};
use sigil_core::errors::{AccessListError, ErrorResponse, TokenError};

/// Seconds a client should wait before retrying a store outage
const STORE_RETRY_AFTER_SECONDS: &str = "1";

/// HTTP status for each engine error kind
pub fn status_for(error: &TokenError) -> StatusCode {
    match error {
        TokenError::InvalidSubject | TokenError::MalformedToken => StatusCode::BAD_REQUEST,
        TokenError::InvalidSignature | TokenError::TokenExpired | TokenError::TokenRevoked => {
            StatusCode::UNAUTHORIZED
        }
        TokenError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        TokenError::SigningFailure | TokenError::KeyLoadFailure { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Convert an engine error into its JSON error response
pub fn handle_token_error(error: &TokenError) -> HttpResponse {
    let status = status_for(error);
    if status.is_server_error() {
        tracing::error!("Token request failed: {}", error);
    } else {
        tracing::debug!("Token request rejected: {}", error.code());
    }

    let mut response = HttpResponse::build(status);
    if error.is_retryable() {
        response.insert_header((header::RETRY_AFTER, STORE_RETRY_AFTER_SECONDS));
    }
    response.json(ErrorResponse::from(error))
}

/// Convert an access list error into its JSON error response
pub fn handle_access_list_error(error: &AccessListError) -> HttpResponse {
    let mut response = match error {
        AccessListError::InvalidAddress(_) => {
            tracing::debug!("Access list request rejected: {}", error);
            HttpResponse::BadRequest()
        }
        AccessListError::StoreUnavailable { .. } => {
            tracing::error!("Access list request failed: {}", error);
            HttpResponse::ServiceUnavailable()
        }
    };

    if error.is_retryable() {
        response.insert_header((header::RETRY_AFTER, STORE_RETRY_AFTER_SECONDS));
    }
    response.json(ErrorResponse::from(error))
}

/// Reject unreadable JSON bodies with the standard error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected request body: {}", err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        "INVALID_REQUEST",
        "Request body is not valid JSON for this endpoint",
    ));
    InternalError::from_response(err, response).into()
}
