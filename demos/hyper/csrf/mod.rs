use std::sync::Arc;

use bunner_csrf_rs::CsrfGuard;

pub type SharedGuard = Arc<CsrfGuard>;
pub type SharedAppState = Arc<AppState>;

pub struct AppState {
    pub guard: SharedGuard,
    pub greeting: &'static str,
}

pub fn build_state() -> SharedAppState {
    Arc::new(AppState {
        guard: Arc::new(CsrfGuard::default()),
        greeting: "Welcome to the Hyper CSRF example!",
    })
}

pub mod middleware;
