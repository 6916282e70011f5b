use actix_web::{web, HttpResponse};
use bridge_core::{Call, Position};
use bridge_engine::recommend;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::store::SessionStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub session_id: String,
    pub position: String,
    pub bid: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub is_recommended: bool,
    pub recommended_bid: String,
    pub rule: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// POST /api/evaluate-bid
///
/// Compares a proposed call with what the engine would bid for that seat now.
async fn evaluate_bid(
    body: web::Json<EvaluateRequest>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, AppError> {
    let position: Position = body.position.parse()?;
    let submitted: Call = body.bid.parse()?;

    let rec = store.with_table(&body.session_id, |table| {
        recommend(table.hand(position), &table.auction, position, submitted)
    })?;

    Ok(HttpResponse::Ok().json(EvaluateResponse {
        is_recommended: rec.matches,
        recommended_bid: rec.recommended.describe(),
        rule: rec.rule_name,
        explanation: rec.explanation,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/evaluate-bid", web::post().to(evaluate_bid));
}
