//! Per-page extraction
//!
//! Produces an independent single-page document for each page of a source.
//! Works by deleting the complement: clone the source, drop every page other
//! than the requested one, then prune the now-orphaned objects.

use lopdf::Document;

use super::PdfOpError;

/// Number of pages in a parsed document.
pub fn page_count(doc: &Document) -> usize {
    doc.get_pages().len()
}

/// Extract page `page` (1-indexed) of `source` as a standalone document.
pub fn extract_single_page(source: &Document, page: u32) -> Result<Document, PdfOpError> {
    let total = source.get_pages().len() as u32;
    if page == 0 || page > total {
        return Err(PdfOpError::PageOutOfRange { page, total });
    }

    let mut single = source.clone();

    // Delete in descending order so earlier page numbers stay valid.
    let mut discard: Vec<u32> = (1..=total).filter(|&p| p != page).collect();
    discard.reverse();
    for number in discard {
        single.delete_pages(&[number]);
    }

    single.prune_objects();
    single.compress();

    Ok(single)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::pdf_with_pages;

    fn load(bytes: &[u8]) -> Document {
        Document::load_mem(bytes).unwrap()
    }

    #[test]
    fn counts_pages() {
        assert_eq!(page_count(&load(&pdf_with_pages(5))), 5);
        assert_eq!(page_count(&load(&pdf_with_pages(0))), 0);
    }

    #[test]
    fn extracts_each_page_as_single_page_document() {
        let source = load(&pdf_with_pages(3));
        for page in 1..=3 {
            let single = extract_single_page(&source, page).unwrap();
            assert_eq!(single.get_pages().len(), 1, "page {} extraction", page);
        }
    }

    #[test]
    fn extracted_page_reparses() {
        let source = load(&pdf_with_pages(4));
        let mut single = extract_single_page(&source, 2).unwrap();
        let mut buffer = Vec::new();
        single.save_to(&mut buffer).unwrap();
        assert_eq!(load(&buffer).get_pages().len(), 1);
    }

    #[test]
    fn page_zero_is_rejected() {
        let source = load(&pdf_with_pages(2));
        assert!(extract_single_page(&source, 0).is_err());
    }

    #[test]
    fn out_of_range_page_is_rejected() {
        let source = load(&pdf_with_pages(2));
        assert!(extract_single_page(&source, 3).is_err());
    }
}
