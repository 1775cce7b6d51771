use thiserror::Error;

/// Errors raised by the codec adapters.
#[derive(Error, Debug)]
pub enum PdfOpError {
    #[error("failed to parse document: {0}")]
    Parse(#[from] lopdf::Error),

    #[error("page {page} out of range (document has {total} pages)")]
    PageOutOfRange { page: u32, total: u32 },

    #[error("malformed document structure: {0}")]
    Structure(String),

    #[error("render failed: {0}")]
    Render(#[from] mupdf::Error),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
