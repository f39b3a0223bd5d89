mod csrf;
mod routes;

use actix_web::{App, HttpServer, web};
use csrf::middleware::BunnerCsrf;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let app_state = csrf::build_state();
    tracing::info!("actix csrf example listening on http://127.0.0.1:5002");

    HttpServer::new(move || {
        let state = app_state.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(BunnerCsrf::new(state.guard.clone()))
            .route("/", web::get().to(routes::greet))
            .route("/", web::post().to(routes::submit))
    })
    .bind(("127.0.0.1", 5002))?
    .run()
    .await
}
