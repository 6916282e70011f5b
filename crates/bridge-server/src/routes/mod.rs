use actix_web::web;

pub mod evaluate;
pub mod health;
pub mod sessions;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .service(
            web::scope("/api")
                .configure(sessions::configure)
                .configure(evaluate::configure),
        );
}
