use std::future::{Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::HeaderMap;
use actix_web::{Error, HttpResponse};
use bunner_csrf_rs::{CsrfDecision, RequestHeaders, constants::header};

use super::SharedGuard;

type LocalBoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + 'a>>;

const RELEVANT_HEADERS: [&str; 5] = [
    header::HOST,
    header::ORIGIN,
    header::REFERER,
    header::CONTENT_TYPE,
    header::X_REQUESTED_WITH,
];

pub struct BunnerCsrf {
    guard: SharedGuard,
}

impl BunnerCsrf {
    pub fn new(guard: SharedGuard) -> Self {
        Self { guard }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BunnerCsrf
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BunnerCsrfMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BunnerCsrfMiddleware {
            service,
            guard: self.guard.clone(),
        }))
    }
}

pub struct BunnerCsrfMiddleware<S> {
    service: S,
    guard: SharedGuard,
}

impl<S, B> Service<ServiceRequest> for BunnerCsrfMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let headers = collect_headers(req.headers());
        let decision = self.guard.check(&headers.context(req.method().as_str()));

        match decision {
            CsrfDecision::Allow => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            CsrfDecision::Reject(reason) => {
                tracing::warn!(
                    method = %req.method(),
                    path = req.path(),
                    reason = reason.as_str(),
                    "blocked cross-site request"
                );
                let response = HttpResponse::Forbidden().finish().map_into_right_body();
                Box::pin(async move { Ok(req.into_response(response)) })
            }
        }
    }
}

fn collect_headers(map: &HeaderMap) -> RequestHeaders {
    let mut headers = RequestHeaders::new();
    for name in RELEVANT_HEADERS {
        for value in map.get_all(name) {
            headers.insert(
                name,
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
    }
    headers
}
