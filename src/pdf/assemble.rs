//! Image-to-document assembly
//!
//! Packs a sequence of in-memory images into a fresh PDF, one page per
//! image, in input order. printpdf 0.8 has a data-oriented API: pages are
//! `PdfPage` structs holding `Vec<Op>` operation lists, serialised with
//! `PdfDocument::save()`.

use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};

use super::PdfOpError;

/// Pixel density assumed for page sizing, in dots per inch.
const ASSEMBLE_DPI: f32 = 96.0;

const MM_PER_INCH: f32 = 25.4;

/// Assemble the given encoded images into a single PDF.
///
/// Each page is sized to its image at 96 DPI, so the image fills the page
/// exactly. Input order becomes page order. Any undecodable image fails the
/// whole assembly.
pub fn images_to_document(images: &[Vec<u8>], title: &str) -> Result<Vec<u8>, PdfOpError> {
    let mut doc = PdfDocument::new(title);
    let mut pages = Vec::with_capacity(images.len());

    for bytes in images {
        let decoded = image::load_from_memory(bytes)?;
        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        let rgb = decoded.to_rgb8();
        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width,
            height,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = doc.add_image(&raw);

        let page_w = Mm(width as f32 / ASSEMBLE_DPI * MM_PER_INCH);
        let page_h = Mm(height as f32 / ASSEMBLE_DPI * MM_PER_INCH);

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: None,
                scale_y: None,
                dpi: Some(ASSEMBLE_DPI),
                rotate: None,
            },
        }];

        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    doc.with_pages(pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}
