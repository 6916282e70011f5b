use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use bridge_server::cors::cors_middleware;
use bridge_server::{telemetry, Config, SessionStore};
use clap::Parser;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = Config::parse();
    let origins = config.effective_origins();
    let store = web::Data::new(SessionStore::new());

    info!(host = %config.host, port = config.port, ?origins, "starting bridge-server");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(bridge_server::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
