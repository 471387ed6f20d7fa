use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Domain error taxonomy for the meeting & voting core.
///
/// Every variant carries the user-facing message (Indonesian, like the rest
/// of the koperasi application). The variant is what the HTTP layer keys on
/// for the status code; the message is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Meeting, agenda item, or vote results unknown.
    NotFound(String),
    /// Mutation attempted against a meeting whose lifecycle forbids it
    /// (already completed, backwards status transition, double close).
    InvalidState(String),
    /// Member already present in the voter set for the agenda item.
    DuplicateVote(String),
    /// Malformed or incomplete input.
    Validation(String),
}

impl AppError {
    pub fn meeting_not_found() -> Self {
        AppError::NotFound("Rapat tidak ditemukan".to_string())
    }

    pub fn agenda_item_not_found() -> Self {
        AppError::NotFound("Agenda tidak ditemukan".to_string())
    }

    pub fn vote_results_not_found() -> Self {
        AppError::NotFound("Hasil voting tidak ditemukan".to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg)
            | AppError::InvalidState(msg)
            | AppError::DuplicateVote(msg)
            | AppError::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(body),
            AppError::InvalidState(_) | AppError::DuplicateVote(_) => {
                HttpResponse::Conflict().json(body)
            }
            AppError::Validation(_) => HttpResponse::BadRequest().json(body),
        }
    }
}
