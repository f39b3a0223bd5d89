use std::sync::Arc;

use bunner_csrf_rs::CsrfGuard;

pub type SharedGuard = Arc<CsrfGuard>;

#[derive(Clone)]
pub struct AppState {
    pub guard: SharedGuard,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    AppState {
        guard: Arc::new(CsrfGuard::default()),
        greeting: "Welcome to the Actix CSRF example!",
    }
}

pub mod middleware;
