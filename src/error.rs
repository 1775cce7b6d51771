//! Error types for the PDF toolkit server

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::pdf::PdfOpError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Pdf(#[from] PdfOpError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                format!("missing required field: {}", field),
            ),
            AppError::Multipart(e) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                format!("invalid multipart request: {}", e),
            ),
            AppError::NotFound(what) => {
                (StatusCode::NOT_FOUND, "not_found", format!("not found: {}", what))
            }
            // Codec, filesystem, and task failures all collapse to a generic
            // 500; the detail is logged server-side only.
            AppError::Pdf(e) => {
                tracing::error!("PDF operation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Task(e) => {
                tracing::error!("blocking task failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
