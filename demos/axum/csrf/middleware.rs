use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bunner_csrf_rs::{CsrfDecision, RequestHeaders, constants::header};

use super::AppState;

const RELEVANT_HEADERS: [&str; 5] = [
    header::HOST,
    header::ORIGIN,
    header::REFERER,
    header::CONTENT_TYPE,
    header::X_REQUESTED_WITH,
];

pub async fn csrf_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let headers = collect_headers(request.headers());
    let decision = state.guard.check(&headers.context(request.method().as_str()));

    match decision {
        CsrfDecision::Allow => next.run(request).await,
        CsrfDecision::Reject(reason) => {
            tracing::warn!(
                method = %request.method(),
                path = request.uri().path(),
                reason = reason.as_str(),
                "blocked cross-site request"
            );
            StatusCode::FORBIDDEN.into_response()
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
