#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use bunner_csrf_rs::{CsrfDecision, CsrfGuard, RequestHeaders};

pub fn router(guard: CsrfGuard) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { "Hello World!\n" })
                .post(|| async { "OK\n" })
                .put(|| async { "OK\n" })
                .delete(|| async { "OK\n" }),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::new(guard),
            csrf_middleware,
        ))
}

async fn csrf_middleware(
    State(guard): State<Arc<CsrfGuard>>,
    request: Request,
    next: Next,
) -> Response {
    let headers = request_headers(request.headers());
    let decision = guard.check(&headers.context(request.method().as_str()));

    match decision {
        CsrfDecision::Allow => next.run(request).await,
        CsrfDecision::Reject(_) => StatusCode::FORBIDDEN.into_response(),
    }
}

fn request_headers(map: &HeaderMap) -> RequestHeaders {
    map.iter()
        .map(|(name, value)| {
            (
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}
