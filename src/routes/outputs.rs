//! Output artifact downloads
//!
//! GET /output/:filename - fetch path for artifacts whose producing
//! operation only reports a count (split, pdf_to_jpg).

use axum::extract::{Path, State};
use axum::response::Response;

use crate::error::AppError;
use crate::state::AppState;
use crate::storage;

use super::attachment;

pub async fn download_output(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let name = storage::sanitize_filename(&filename);
    let path = state.config().storage.output_dir.join(&name);

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound(name.clone()))?;

    let content_type = mime_guess::from_path(&name).first_or_octet_stream();
    attachment(bytes, &name, content_type.as_ref())
}
