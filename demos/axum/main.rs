mod csrf;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use csrf::middleware::csrf_middleware;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let app_state = csrf::build_state();

    let app = Router::new()
        .route("/", get(routes::greet).post(routes::submit))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            csrf_middleware,
        ))
        .with_state(app_state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 5001));
    tracing::info!(%addr, "axum csrf example listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await
}
