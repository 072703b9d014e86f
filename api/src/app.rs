//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use sigil_core::errors::ErrorResponse;
use sigil_core::repositories::{IpStatusStore, RevocationStore};
use sigil_core::services::{AccessListService, TokenService};

use crate::handlers::json_error_handler;
use crate::middleware::IpStatusGuard;
use crate::routes::health::health_check;
use crate::routes::ip_status::{get_ip_status, list_ip_statuses, set_ip_statuses};
use crate::routes::tokens::{issue_token, revoke_token, verify_token};

/// Token engine over whichever store was selected at startup
pub type TokenEngine = TokenService<Arc<dyn RevocationStore>>;

/// Access list over whichever store was selected at startup
pub type AccessList = AccessListService<Arc<dyn IpStatusStore>>;

/// Application state that holds shared services
pub struct AppState {
    pub token_service: Arc<TokenEngine>,
    pub access_list: Arc<AccessList>,
}

impl AppState {
    pub fn new(token_service: Arc<TokenEngine>, access_list: Arc<AccessList>) -> Self {
        Self {
            token_service,
            access_list,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let access_list = app_state.access_list.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/tokens")
                        .wrap(IpStatusGuard::new(access_list))
                        .route("", web::post().to(issue_token))
                        .route("/verify", web::post().to(verify_token))
                        .route("/revoke", web::post().to(revoke_token)),
                )
                .service(
                    web::scope("/ip-status")
                        .route("", web::post().to(set_ip_statuses))
                        .route("", web::get().to(list_ip_statuses))
                        .route("/{ip}", web::get().to(get_ip_status)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
