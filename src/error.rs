use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong with a sliding-window request.
///
/// Validation failures map to 400, overflow to 500. The body is always
/// `{ "message": ... }` since both frontends surface `err.message` verbatim.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid number in input: {0:?}")]
    InvalidNumberFormat(String),

    #[error("Window size must be a positive integer")]
    InvalidWindowSize,

    #[error("Window size {window_size} exceeds sequence length {len}")]
    WindowSizeTooLarge { window_size: usize, len: usize },

    #[error("Number sequence is empty")]
    EmptySequence,

    #[error("Window sum exceeds the representable integer range")]
    NumericOverflow,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidNumberFormat { .. }
            | AppError::InvalidWindowSize
            | AppError::WindowSizeTooLarge { .. }
            | AppError::EmptySequence => StatusCode::BAD_REQUEST,
            AppError::NumericOverflow => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
