//! Access list middleware
//!
//! Refuses requests from blocked peer addresses with `403 Forbidden`.
//! Trusted and unlisted addresses pass through. The peer address of the
//! socket is used, never a forwarding header, so a client cannot pick its
//! own status.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use sigil_core::domain::IpStatus;
use sigil_core::errors::ErrorResponse;

use crate::app::AccessList;

/// Access list middleware factory
pub struct IpStatusGuard {
    access_list: Arc<AccessList>,
}

impl IpStatusGuard {
    pub fn new(access_list: Arc<AccessList>) -> Self {
        Self { access_list }
    }
}

impl<S, B> Transform<S, ServiceRequest> for IpStatusGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = IpStatusGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IpStatusGuardMiddleware {
            service: Rc::new(service),
            access_list: self.access_list.clone(),
        }))
    }
}

/// Access list middleware service
pub struct IpStatusGuardMiddleware<S> {
    service: Rc<S>,
    access_list: Arc<AccessList>,
}

impl<S, B> Service<ServiceRequest> for IpStatusGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let access_list = self.access_list.clone();

        Box::pin(async move {
            if let Some(ip) = req.peer_addr().map(|addr| addr.ip()) {
                match access_list.status_of_addr(ip).await {
                    Ok(IpStatus::Blocked) => {
                        tracing::warn!("Refused request from blocked address {}", ip);
                        let response = HttpResponse::Forbidden().json(ErrorResponse::new(
                            "IP_BLOCKED",
                            "Requests from this address are blocked",
                        ));
                        return Ok(req.into_response(response).map_into_right_body());
                    }
                    Ok(_) => {}
                    // Lookup failures let the request through
                    Err(e) => tracing::warn!("Access list lookup failed for {}: {}", ip, e),
                }
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}
