//! Text extraction from résumé files

use crate::error::{CareerCoachError, Result};
use log::{debug, warn};
use lopdf::Document;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Extract the lower-cased text of every page of a PDF held in memory.
///
/// A page whose text cannot be decoded contributes nothing. Only a document
/// that cannot be parsed at all is an error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| CareerCoachError::PdfExtraction(format!("Failed to parse PDF: {}", e)))?;

    let pages = doc.get_pages();
    let mut text = String::new();

    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(content) => text.push_str(&content),
            Err(e) => debug!("No text extracted from page {}: {}", page_num, e),
        }
    }

    if text.trim().is_empty() && !pages.is_empty() {
        // lopdf gives up on some font encodings that pdf-extract can decode
        debug!("Per-page extraction produced no text, retrying whole document");
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(content) => text = content,
            Err(e) => warn!("Fallback PDF extraction failed: {}", e),
        }
    }

    Ok(text.to_lowercase())
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(CareerCoachError::Io)?;

        extract_pdf_text(&bytes).map_err(|e| match e {
            CareerCoachError::PdfExtraction(msg) => {
                CareerCoachError::PdfExtraction(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }
}

/// Plain-text résumés, lower-cased like PDF output
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(CareerCoachError::Io)?;
        Ok(content.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// One page of a generated test document
    enum Page<'a> {
        Text(&'a str),
        /// Content stream with no text operators
        Blank,
        /// `Contents` points at an object that is not in the file
        Dangling,
    }

    fn build_document(pages: &[Page]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in pages {
            let contents = match page {
                Page::Text(page_text) => {
                    let content = Content {
                        operations: vec![
                            Operation::new("BT", vec![]),
                            Operation::new("Tf", vec!["F1".into(), 12.into()]),
                            Operation::new("Td", vec![72.into(), 700.into()]),
                            Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                            Operation::new("ET", vec![]),
                        ],
                    };
                    let id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
                    Object::Reference(id)
                }
                Page::Blank => {
                    let id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
                    Object::Reference(id)
                }
                Page::Dangling => Object::Reference((999, 0)),
            };
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => contents,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(595),
                    Object::Integer(842),
                ],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let pages: Vec<Page> = pages.iter().map(|text| Page::Text(*text)).collect();
        build_document(&pages)
    }

    #[test]
    fn test_extract_pdf_text_lowercases_all_pages() {
        let bytes = build_pdf(&["Jane Doe Python", "SQL Expert"]);
        let text = extract_pdf_text(&bytes).unwrap();

        assert!(text.contains("jane doe python"));
        assert!(text.contains("sql expert"));
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn test_unreadable_page_contributes_nothing() {
        let bytes = build_document(&[Page::Dangling, Page::Text("Good Page Python")]);
        let text = extract_pdf_text(&bytes).unwrap();

        assert!(text.contains("good page python"));
        assert_eq!(text.trim(), "good page python");
    }

    #[test]
    fn test_document_without_text_falls_back_and_stays_ok() {
        // Nothing decodes per page, so the whole-document extractor runs
        let bytes = build_document(&[Page::Blank]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_garbage_bytes_are_an_error() {
        let result = extract_pdf_text(b"definitely not a pdf");
        assert!(matches!(result, Err(CareerCoachError::PdfExtraction(_))));
    }
}
