//! Route modules for the PDF toolkit server

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};

use crate::error::AppError;

pub mod convert;
pub mod index;
pub mod merge;
pub mod outputs;
pub mod split;

/// Build an attachment-download response for a produced artifact.
pub(crate) fn attachment(
    bytes: Vec<u8>,
    filename: &str,
    content_type: &str,
) -> Result<Response, AppError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(e.to_string()))
}
