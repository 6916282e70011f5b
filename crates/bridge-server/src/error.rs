use actix_web::error::{JsonPayloadError, ResponseError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use bridge_core::{ParseCallError, ParsePositionError, Position};
use serde::Serialize;
use thiserror::Error;

/// RFC 7807 body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },
    #[error("Illegal bid: {detail}")]
    IllegalBid { detail: String },
    #[error("It's {expected}'s turn")]
    OutOfTurn { expected: Position },
    #[error("The auction is over")]
    AuctionComplete,
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
}

impl AppError {
    pub fn bad_request(code: &'static str, detail: String) -> Self {
        Self::BadRequest { code, detail }
    }

    pub fn not_found(code: &'static str, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn session_not_found(id: &str) -> Self {
        Self::not_found("SESSION_NOT_FOUND", format!("Session {id} not found"))
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { code, .. } => *code,
            AppError::IllegalBid { .. } => "ILLEGAL_BID",
            AppError::OutOfTurn { .. } => "OUT_OF_TURN",
            AppError::AuctionComplete => "AUCTION_COMPLETE",
            AppError::NotFound { code, .. } => *code,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::IllegalBid { detail } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::IllegalBid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::OutOfTurn { .. } => StatusCode::CONFLICT,
            AppError::AuctionComplete => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<ParseCallError> for AppError {
    fn from(e: ParseCallError) -> Self {
        AppError::bad_request("INVALID_CALL", e.to_string())
    }
}

impl From<ParsePositionError> for AppError {
    fn from(e: ParsePositionError) -> Self {
        AppError::bad_request("INVALID_POSITION", e.to_string())
    }
}

/// Routes malformed JSON bodies through the same problem-details shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request("INVALID_JSON", err.to_string()).into()
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();

        let problem_details = ProblemDetails {
            type_: "about:blank".to_string(),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::bad_request("INVALID_CALL", "x".into()), 400),
            (AppError::IllegalBid { detail: "x".into() }, 422),
            (AppError::OutOfTurn { expected: Position::East }, 409),
            (AppError::AuctionComplete, 409),
            (AppError::session_not_found("abc"), 404),
        ];
        for (err, status) in cases {
            assert_eq!(err.status().as_u16(), status, "{err:?}");
        }
    }

    #[test]
    fn test_out_of_turn_names_the_seat() {
        let err = AppError::OutOfTurn { expected: Position::West };
        assert_eq!(err.detail(), "It's West's turn");
        assert_eq!(err.code(), "OUT_OF_TURN");
    }

    #[test]
    fn test_parse_errors_are_bad_requests() {
        let err: AppError = "9Z".parse::<bridge_core::Call>().unwrap_err().into();
        assert_eq!(err.code(), "INVALID_CALL");
        let err: AppError = "middle".parse::<Position>().unwrap_err().into();
        assert_eq!(err.code(), "INVALID_POSITION");
    }

    #[test]
    fn test_humanize_code() {
        assert_eq!(AppError::humanize_code("SESSION_NOT_FOUND"), "Session Not Found");
    }
}
