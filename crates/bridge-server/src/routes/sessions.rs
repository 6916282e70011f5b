//! Table lifecycle routes.

use actix_web::{web, HttpResponse};
use bridge_core::Position;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::store::SessionStore;

#[derive(Debug, Deserialize)]
pub struct BidRequest {
    pub position: String,
    pub bid: String,
}

/// POST /api/sessions
async fn create_session(store: web::Data<SessionStore>) -> HttpResponse {
    HttpResponse::Created().json(store.create())
}

/// GET /api/sessions/{id}
async fn get_session(
    path: web::Path<String>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, AppError> {
    let view = store.with_table(&path, |table| table.view())?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/sessions/{id}/bid
///
/// Body: `{"position": "North", "bid": "1NT"}`. The position must be the seat on turn.
async fn submit_bid(
    path: web::Path<String>,
    body: web::Json<BidRequest>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let position: Position = body.position.parse()?;

    let view = store
        .with_table_mut(&id, |table| {
            let call = table.submit(position, &body.bid)?;
            info!(session_id = %id, %position, %call, "bid accepted");
            Ok(table.view())
        })
        .inspect_err(|e| warn!(session_id = %id, %position, bid = %body.bid, error = %e, "bid rejected"))?;

    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/sessions/{id}/auto
///
/// The engine bids for the seat on turn.
async fn auto_bid(
    path: web::Path<String>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let view = store.with_table_mut(&id, |table| {
        let (position, call, rule) = table.auto_bid()?;
        info!(session_id = %id, %position, %call, rule, "engine bid");
        Ok(table.view())
    })?;

    Ok(HttpResponse::Ok().json(view))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}/bid", web::post().to(submit_bid))
        .route("/sessions/{id}/auto", web::post().to(auto_bid));
}
