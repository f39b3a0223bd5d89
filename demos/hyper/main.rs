mod csrf;
mod routes;

use std::error::Error;
use std::net::SocketAddr;

use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let state = csrf::build_state();

    let addr = SocketAddr::from(([127, 0, 0, 1], 5003));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "hyper csrf example listening");

    loop {
        let (stream, _) = listener.accept().await?;
        let state = state.clone();
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            let service =
                csrf::middleware::BunnerCsrf::new(state.guard.clone(), routes::router(state));

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::error!(error = %err, "connection error");
            }
        });
    }
}
