//! Split endpoint
//!
//! POST /split - accepts one file in the multipart field `pdf_file`, writes
//! every page as an independent single-page document to
//! `page_<n>.pdf` (1-based) in the output directory, and reports the page
//! count as plain text. The produced files are not returned in the response;
//! they are fetchable via GET /output/:filename.

use axum::extract::{Multipart, State};
use lopdf::Document;

use crate::error::AppError;
use crate::pdf::{self, PdfOpError};
use crate::state::AppState;
use crate::storage;

pub async fn split_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String, AppError> {
    let storage_cfg = state.config().storage.clone();

    let mut input = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("pdf_file") {
            continue;
        }
        let filename = storage::sanitize_filename(field.file_name().unwrap_or("upload.pdf"));
        let data = field.bytes().await?;
        input = Some(storage::save_upload(&storage_cfg.upload_dir, &filename, &data).await?);
        break;
    }

    let path = input.ok_or(AppError::MissingField("pdf_file"))?;
    let output_dir = storage_cfg.output_dir.clone();

    let pages = tokio::task::spawn_blocking(move || -> Result<usize, AppError> {
        let source = Document::load(&path).map_err(PdfOpError::from)?;
        let total = pdf::page_count(&source);

        for page in 1..=total as u32 {
            let mut single = pdf::extract_single_page(&source, page)?;
            let mut buffer = Vec::new();
            single.save_to(&mut buffer).map_err(PdfOpError::from)?;
            std::fs::write(output_dir.join(format!("page_{}.pdf", page)), buffer)?;
        }

        Ok(total)
    })
    .await??;

    tracing::info!(pages, "split PDF into single-page documents");

    Ok(format!("PDF split successfully into {} pages!", pages))
}
