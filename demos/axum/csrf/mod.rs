use std::sync::Arc;

use bunner_csrf_rs::{CsrfGuard, CsrfOptions, RequestedWithPolicy};

pub type SharedGuard = Arc<CsrfGuard>;

#[derive(Clone)]
pub struct AppState {
    pub guard: SharedGuard,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    let options = CsrfOptions::new().requested_with(RequestedWithPolicy::Corroborate);

    AppState {
        guard: Arc::new(CsrfGuard::new(options)),
        greeting: "Welcome to the Axum CSRF example!",
    }
}

pub mod middleware;
