//! PDF Toolkit Server
//!
//! A web-exposed file-conversion utility: merge PDFs, split one PDF into
//! per-page files, rasterize PDF pages to JPG images, and assemble JPG
//! images into a single PDF. Every operation is a stateless single-request
//! batch job over two shared directories (uploads in, artifacts out).
//!
//! # Modules
//!
//! - `pdf`: codec adapters wrapping lopdf / MuPDF / printpdf
//! - `routes`: one HTTP handler per operation
//! - `storage`: upload/output directories and filename sanitization

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod pdf;
pub mod routes;
pub mod state;
pub mod storage;

use state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::index::index))
        .route("/health", get(health_check))
        .route("/merge", post(routes::merge::merge_pdfs))
        .route("/split", post(routes::split::split_pdf))
        .route("/pdf_to_jpg", post(routes::convert::pdf_to_jpg))
        .route("/jpg_to_pdf", post(routes::convert::jpg_to_pdf))
        .route("/output/:filename", get(routes::outputs::download_output))
        // Scanned documents get large quickly; allow up to 512MB per upload.
        .layer(DefaultBodyLimit::max(512 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
