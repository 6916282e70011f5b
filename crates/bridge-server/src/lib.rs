//! HTTP session API for the bidding tutor.

use actix_web::web;

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use error::AppError;
pub use store::{SessionStore, SessionView, Table};

/// Registers the JSON error mapping and every route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .configure(routes::configure);
}
