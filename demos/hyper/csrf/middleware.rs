use std::future::Future;
use std::pin::Pin;

use bunner_csrf_rs::constants::header;
use bunner_csrf_rs::{CsrfDecision, RequestHeaders};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::HeaderMap;
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedGuard;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CsrfBody = Full<Bytes>;

const RELEVANT_HEADERS: [&str; 5] = [
    header::HOST,
    header::ORIGIN,
    header::REFERER,
    header::CONTENT_TYPE,
    header::X_REQUESTED_WITH,
];

/// Hyper middleware following the "Getting Started with a Server Middleware"
/// guide: https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct BunnerCsrf<S> {
    inner: S,
    guard: SharedGuard,
}

impl<S> BunnerCsrf<S> {
    pub fn new(guard: SharedGuard, inner: S) -> Self {
        Self { inner, guard }
    }
}

impl<S> Service<Request<Incoming>> for BunnerCsrf<S>
where
    S: Service<Request<Incoming>, Response = Response<CsrfBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CsrfBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let headers = collect_headers(req.headers());
        let decision = self.guard.check(&headers.context(req.method().as_str()));

        match decision {
            CsrfDecision::Allow => {
                let inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
            CsrfDecision::Reject(reason) => {
                tracing::warn!(
                    method = %req.method(),
                    path = req.uri().path(),
                    reason = reason.as_str(),
                    "blocked cross-site request"
                );
                Box::pin(async move { Ok(forbidden()) })
            }
        }
    }
}

fn forbidden() -> Response<CsrfBody> {
    Response::builder()
        .status(StatusCode::FORBIDDEN)
        .body(Full::new(Bytes::new()))
        .expect("failed to build rejection response")
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
