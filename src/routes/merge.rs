//! Merge endpoint
//!
//! POST /merge - accepts the multipart field `pdf_files` (multiple file
//! parts), persists each upload, concatenates them in submission order, and
//! streams the merged document back as an attachment download.

use axum::extract::{Multipart, State};
use axum::response::Response;
use lopdf::Document;

use crate::error::AppError;
use crate::pdf::{self, PdfOpError};
use crate::state::AppState;
use crate::storage;

use super::attachment;

/// Fixed output name; overwritten on every merge request.
const MERGED_NAME: &str = "merged.pdf";

pub async fn merge_pdfs(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let storage_cfg = state.config().storage.clone();

    // Persist each upload, but merge from the received bytes so that inputs
    // sharing a sanitized filename still contribute their own pages.
    let mut inputs = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("pdf_files") {
            continue;
        }
        let filename = storage::sanitize_filename(field.file_name().unwrap_or("upload.pdf"));
        let data = field.bytes().await?;
        storage::save_upload(&storage_cfg.upload_dir, &filename, &data).await?;
        inputs.push(data);
    }

    if inputs.is_empty() {
        return Err(AppError::MissingField("pdf_files"));
    }

    let output_path = storage_cfg.output_dir.join(MERGED_NAME);
    let out = output_path.clone();
    let file_count = inputs.len();

    let merged = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, AppError> {
        let mut documents = Vec::with_capacity(inputs.len());
        for data in &inputs {
            documents.push(Document::load_mem(data).map_err(PdfOpError::from)?);
        }

        let mut merged = pdf::merge_documents(documents)?;
        let mut buffer = Vec::new();
        merged.save_to(&mut buffer).map_err(PdfOpError::from)?;
        std::fs::write(&out, &buffer)?;
        Ok(buffer)
    })
    .await??;

    tracing::info!(
        files = file_count,
        output = %output_path.display(),
        "merged PDFs"
    );

    attachment(merged, MERGED_NAME, "application/pdf")
}
