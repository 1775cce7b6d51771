//! Conversion endpoints
//!
//! POST /pdf_to_jpg - rasterizes every page of one uploaded document to
//! `page_<n>.jpg` (1-based) in the output directory and reports the image
//! count as plain text.
//!
//! POST /jpg_to_pdf - packs the uploaded images into a single document, one
//! page per image in submission order, and streams it back as an attachment
//! download. Unlike the other operations the images are never persisted to
//! the upload directory; the in-memory streams feed the encoder directly.

use axum::extract::{Multipart, State};
use axum::response::Response;

use crate::error::AppError;
use crate::pdf::assemble::images_to_document;
use crate::pdf::rasterize::{rasterize_to_jpegs, DEFAULT_DPI};
use crate::state::AppState;
use crate::storage;

use super::attachment;

/// Fixed output name for assembled documents; overwritten on every request.
const ASSEMBLED_NAME: &str = "output.pdf";

pub async fn pdf_to_jpg(
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

    let images = tokio::task::spawn_blocking(move || -> Result<usize, AppError> {
        let jpegs = rasterize_to_jpegs(&path, DEFAULT_DPI)?;
        for (index, jpeg) in jpegs.iter().enumerate() {
            std::fs::write(output_dir.join(format!("page_{}.jpg", index + 1)), jpeg)?;
        }
        Ok(jpegs.len())
    })
    .await??;

    tracing::info!(images, "rasterized PDF pages to JPG");

    Ok(format!("PDF converted to {} JPG images!", images))
}

pub async fn jpg_to_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let storage_cfg = state.config().storage.clone();

    let mut images = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("jpg_files") {
            continue;
        }
        images.push(field.bytes().await?.to_vec());
    }

    if images.is_empty() {
        return Err(AppError::MissingField("jpg_files"));
    }

    let output_path = storage_cfg.output_dir.join(ASSEMBLED_NAME);
    let out = output_path.clone();
    let image_count = images.len();

    let assembled = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, AppError> {
        let pdf = images_to_document(&images, "output")?;
        std::fs::write(&out, &pdf)?;
        Ok(pdf)
    })
    .await??;

    tracing::info!(
        images = image_count,
        output = %output_path.display(),
        "assembled images into PDF"
    );

    attachment(assembled, ASSEMBLED_NAME, "application/pdf")
}
