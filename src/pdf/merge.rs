//! Document concatenation
//!
//! Combines parsed documents into one, preserving submission order. Object
//! IDs from each subsequent source are shifted past the accumulated maximum
//! so the object graphs can coexist, then the destination page tree is
//! rebuilt to list every page in order.

use lopdf::{Document, Object, ObjectId};

use super::PdfOpError;

/// Merge parsed documents into a single one, pages in input order.
pub fn merge_documents(documents: Vec<Document>) -> Result<Document, PdfOpError> {
    let mut sources = documents.into_iter();
    let mut merged = sources
        .next()
        .ok_or_else(|| PdfOpError::Structure("no documents to merge".into()))?;

    let mut max_id = merged.max_id;
    let mut page_refs: Vec<ObjectId> = merged.get_pages().into_values().collect();

    for source in sources {
        let source_pages: Vec<ObjectId> = source.get_pages().into_values().collect();
        let source_max = source.max_id;
        let offset = max_id;

        for (old_id, object) in source.objects {
            let new_id = (old_id.0 + offset, old_id.1);
            merged.objects.insert(new_id, shift_references(object, offset));
        }

        for page in source_pages {
            page_refs.push((page.0 + offset, page.1));
        }

        max_id = (source_max + offset).max(max_id);
    }

    rebuild_page_tree(&mut merged, page_refs)?;
    merged.max_id = max_id;
    merged.compress();

    Ok(merged)
}

/// Recursively shift every object reference by `offset`.
fn shift_references(obj: Object, offset: u32) -> Object {
    match obj {
        Object::Reference(id) => Object::Reference((id.0 + offset, id.1)),
        Object::Array(items) => Object::Array(
            items
                .into_iter()
                .map(|o| shift_references(o, offset))
                .collect(),
        ),
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = shift_references(value.clone(), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = shift_references(value.clone(), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}

/// Point the destination catalog's page tree at the combined page list.
fn rebuild_page_tree(doc: &mut Document, page_refs: Vec<ObjectId>) -> Result<(), PdfOpError> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .map_err(|_| PdfOpError::Structure("no Root in trailer".into()))?
        .as_reference()
        .map_err(|_| PdfOpError::Structure("Root is not a reference".into()))?;

    let pages_id = doc
        .objects
        .get(&catalog_id)
        .ok_or_else(|| PdfOpError::Structure("catalog object missing".into()))?
        .as_dict()
        .map_err(|_| PdfOpError::Structure("catalog is not a dictionary".into()))?
        .get(b"Pages")
        .map_err(|_| PdfOpError::Structure("no Pages in catalog".into()))?
        .as_reference()
        .map_err(|_| PdfOpError::Structure("Pages is not a reference".into()))?;

    match doc.objects.get_mut(&pages_id) {
        Some(Object::Dictionary(pages_dict)) => {
            let kids: Vec<Object> = page_refs.iter().map(|&id| Object::Reference(id)).collect();
            pages_dict.set("Kids", Object::Array(kids));
            pages_dict.set("Count", Object::Integer(page_refs.len() as i64));
            Ok(())
        }
        _ => Err(PdfOpError::Structure("invalid pages dictionary".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::pdf_with_pages;

    fn load(bytes: &[u8]) -> Document {
        Document::load_mem(bytes).unwrap()
    }

    #[test]
    fn merging_nothing_fails() {
        assert!(merge_documents(vec![]).is_err());
    }

    #[test]
    fn single_document_survives_unchanged() {
        let merged = merge_documents(vec![load(&pdf_with_pages(2))]).unwrap();
        assert_eq!(merged.get_pages().len(), 2);
    }

    #[test]
    fn two_documents_concatenate() {
        let merged =
            merge_documents(vec![load(&pdf_with_pages(2)), load(&pdf_with_pages(3))]).unwrap();
        assert_eq!(merged.get_pages().len(), 5);
    }

    #[test]
    fn many_documents_concatenate_in_order() {
        let inputs: Vec<Document> = (1..=4).map(|n| load(&pdf_with_pages(n))).collect();
        let merged = merge_documents(inputs).unwrap();
        assert_eq!(merged.get_pages().len(), 10);
    }

    #[test]
    fn merged_output_reparses() {
        let mut merged =
            merge_documents(vec![load(&pdf_with_pages(1)), load(&pdf_with_pages(1))]).unwrap();
        let mut buffer = Vec::new();
        merged.save_to(&mut buffer).unwrap();
        assert_eq!(load(&buffer).get_pages().len(), 2);
    }
}
