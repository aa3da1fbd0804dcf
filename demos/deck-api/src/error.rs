use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use deckgen_sdk::DeckgenError;

/// Unified error type that renders as a JSON `{"error": "...", "details": "..."}`
/// response with an appropriate HTTP status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub details: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
            details: details.into(),
        }
    }

    pub fn internal(msg: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
            details: details.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "error": self.message, "details": self.details })),
        )
            .into_response()
    }
}

impl From<DeckgenError> for AppError {
    fn from(e: DeckgenError) -> Self {
        match &e {
            DeckgenError::InvalidArgument(_) => {
                AppError::bad_request("Invalid request", e.to_string())
            }
            _ => AppError::internal("Failed to generate deck", e.to_string()),
        }
    }
}
