//! Session-based authentication middleware.
//!
//! Administrative routes are gated on a boolean session flag. Requests
//! without the flag are redirected to the login page rather than rejected,
//! so a browser lands on the form instead of an error body.

use actix_session::SessionExt;
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Method},
    Error, HttpResponse,
};
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use signage_models::constants::SESSION_LOGGED_IN;
use std::{
    rc::Rc,
    task::{Context, Poll},
};

/// Authentication middleware factory.
pub struct RequireLogin;

impl<S, B> Transform<S, ServiceRequest> for RequireLogin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireLoginMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequireLoginMiddleware {
            service: Rc::new(service),
        })
    }
}

pub struct RequireLoginMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireLoginMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        async move {
            // Fast path for OPTIONS requests
            if Method::OPTIONS == req.method() {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }

            let logged_in = req
                .get_session()
                .get::<bool>(SESSION_LOGGED_IN)
                .unwrap_or(None)
                .unwrap_or(false);

            if logged_in {
                srv.call(req).await.map(|res| res.map_into_left_body())
            } else {
                Ok(req
                    .into_response(
                        HttpResponse::SeeOther()
                            .insert_header((header::LOCATION, "/login"))
                            .finish(),
                    )
                    .map_into_right_body())
            }
        }
        .boxed_local()
    }
}
