//! Page rasterization
//!
//! Renders every page of a document to a JPEG via MuPDF and the `image`
//! encoder. JPEG carries no alpha channel, so pages are rendered straight to
//! opaque RGB.

use std::io::Cursor;
use std::path::Path;

use image::DynamicImage;
use mupdf::{Colorspace, Document, Matrix};

use super::PdfOpError;

/// Default rendering resolution in dots per inch.
pub const DEFAULT_DPI: f32 = 200.0;

/// Rasterize every page of the document at `path`, returning one encoded
/// JPEG per page in page order.
pub fn rasterize_to_jpegs(path: &Path, dpi: f32) -> Result<Vec<Vec<u8>>, PdfOpError> {
    let path_str = path.to_string_lossy();
    let doc = Document::open(&path_str)?;
    let count = doc.page_count()?;

    // PDF points are 72 per inch.
    let scale = dpi / 72.0;
    let matrix = Matrix::new_scale(scale, scale);
    let colorspace = Colorspace::device_rgb();

    let mut pages = Vec::with_capacity(count.max(0) as usize);
    for index in 0..count {
        let page = doc.load_page(index)?;
        let pixmap = page.to_pixmap(&matrix, &colorspace, false, true)?;
        pages.push(encode_jpeg(&pixmap)?);
    }

    Ok(pages)
}

fn encode_jpeg(pixmap: &mupdf::Pixmap) -> Result<Vec<u8>, PdfOpError> {
    let width = pixmap.width() as u32;
    let height = pixmap.height() as u32;
    let samples = pixmap.samples();
    let n = pixmap.n() as usize;

    let mut rgb_buffer = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height as usize {
        for x in 0..width as usize {
            let offset = (y * width as usize + x) * n;
            let r = samples.get(offset).copied().unwrap_or(0);
            let g = samples.get(offset + 1).copied().unwrap_or(0);
            let b = samples.get(offset + 2).copied().unwrap_or(0);
            rgb_buffer.extend_from_slice(&[r, g, b]);
        }
    }

    let img = image::RgbImage::from_raw(width, height, rgb_buffer).ok_or_else(|| {
        PdfOpError::Structure("pixmap dimensions do not match sample buffer".into())
    })?;

    let mut output = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut output), image::ImageFormat::Jpeg)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::pdf_with_pages;

    const JPEG_MAGIC: [u8; 2] = [0xFF, 0xD8];

    #[test]
    fn renders_one_jpeg_per_page() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("two_pages.pdf");
        std::fs::write(&path, pdf_with_pages(2)).unwrap();

        let jpegs = rasterize_to_jpegs(&path, DEFAULT_DPI).unwrap();
        assert_eq!(jpegs.len(), 2);
        for jpeg in &jpegs {
            assert_eq!(&jpeg[..2], &JPEG_MAGIC);
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.pdf");
        assert!(rasterize_to_jpegs(&path, DEFAULT_DPI).is_err());
    }

    #[test]
    fn garbage_input_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("garbage.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();
        assert!(rasterize_to_jpegs(&path, DEFAULT_DPI).is_err());
    }
}
