//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{DocumentDecoder, Result};
use crate::error::DecodeError;

/// PDF decoder.
///
/// lopdf opens the file (and removes empty-password encryption, which many
/// resume generators apply); pdf-extract then lays out the page text.
pub struct PdfDecoder {
    try_empty_password: bool,
}

impl PdfDecoder {
    /// Create a new PDF decoder.
    pub fn new() -> Self {
        Self {
            try_empty_password: true,
        }
    }

    /// Set whether encrypted PDFs are retried with an empty password.
    pub fn with_empty_password(mut self, enabled: bool) -> Self {
        self.try_empty_password = enabled;
        self
    }

    /// Load the document and return bytes pdf-extract can read.
    fn prepare(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut doc = Document::load_mem(data).map_err(|e| DecodeError::Pdf(e.to_string()))?;

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(DecodeError::NoPages);
        }

        if !doc.is_encrypted() {
            debug!("Loaded PDF with {} pages", page_count);
            return Ok(data.to_vec());
        }

        if !self.try_empty_password || doc.decrypt("").is_err() {
            return Err(DecodeError::Encrypted);
        }
        debug!("Decrypted PDF with empty password");

        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| DecodeError::Pdf(format!("failed to save decrypted PDF: {}", e)))?;
        Ok(decrypted)
    }
}

impl Default for PdfDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentDecoder for PdfDecoder {
    fn decode(&self, data: &[u8]) -> Result<String> {
        let raw = self.prepare(data)?;
        pdf_extract::extract_text_from_mem(&raw).map_err(|e| DecodeError::Pdf(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{document_to_text, DocumentKind};
    use crate::extract::{extract, ExtractionMode};
    use crate::models::config::DocumentConfig;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use pretty_assertions::assert_eq;

    /// Build a PDF with one page per entry of `pages`, each line of text on
    /// its own row.
    fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for lines in pages {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 760.into()]),
            ];
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    operations.push(Operation::new("Td", vec![0.into(), (-20).into()]));
                }
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
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
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn test_rejects_non_pdf() {
        let result = PdfDecoder::new().decode(b"not a pdf at all");
        assert!(matches!(result, Err(DecodeError::Pdf(_))));
    }

    #[test]
    fn test_decode_resume_pdf() {
        let data = build_pdf(&[&[
            "Full Name: Jane Doe",
            "jane.doe@example.com",
            "Skills",
            "-----",
            "- Rust",
            "- SQL",
        ]]);
        assert_eq!(DocumentKind::sniff(&data), DocumentKind::Pdf);

        let text = document_to_text(&data, DocumentKind::Pdf, &DocumentConfig::default()).unwrap();
        let result = extract(&text, ExtractionMode::Document);

        assert_eq!(result.name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.email.as_deref(), Some("jane.doe@example.com"));
        let skills = result.skills.unwrap();
        assert!(skills.contains("Rust"), "skills: {}", skills);
        assert!(skills.contains("SQL"), "skills: {}", skills);
    }

    #[test]
    fn test_pdf_without_pages() {
        let data = build_pdf(&[]);
        let result = PdfDecoder::new().decode(&data);
        assert!(matches!(result, Err(DecodeError::NoPages)));
    }
}
