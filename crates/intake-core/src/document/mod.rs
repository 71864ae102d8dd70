//! Document-to-text decoding.
//!
//! Uploaded resumes are decoded to plain text before document-mode
//! extraction. Decoding is the only fallible step of the pipeline; a
//! failure is returned as a [`DecodeError`] and never reaches the
//! extraction rules as partial text.

#[cfg(feature = "pdf")]
mod pdf;
mod plain;

#[cfg(feature = "pdf")]
pub use pdf::PdfDecoder;
pub use plain::PlainTextDecoder;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DecodeError;
use crate::models::config::DocumentConfig;

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Kind of uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Determine the kind from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "txt" => Ok(Self::PlainText),
            other => Err(DecodeError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Determine the kind of an upload: from its extension when it has one,
    /// otherwise from the contents.
    pub fn detect(path: &Path, data: &[u8]) -> Result<Self> {
        if path.extension().is_some() {
            Self::from_path(path)
        } else {
            Ok(Self::sniff(data))
        }
    }

    /// Guess the kind from the file contents.
    pub fn sniff(data: &[u8]) -> Self {
        if data.starts_with(b"%PDF-") {
            Self::Pdf
        } else {
            Self::PlainText
        }
    }
}

/// Converts uploaded bytes to text.
pub trait DocumentDecoder {
    /// Decode the whole document.
    fn decode(&self, data: &[u8]) -> Result<String>;
}

/// Decode an upload of the given kind, enforcing the configured limits.
pub fn document_to_text(data: &[u8], kind: DocumentKind, config: &DocumentConfig) -> Result<String> {
    if data.len() > config.max_document_bytes {
        warn!(
            "Rejecting {} byte document (limit {})",
            data.len(),
            config.max_document_bytes
        );
        return Err(DecodeError::TooLarge {
            size: data.len(),
            limit: config.max_document_bytes,
        });
    }

    let text = match kind {
        DocumentKind::PlainText => PlainTextDecoder.decode(data)?,
        #[cfg(feature = "pdf")]
        DocumentKind::Pdf => PdfDecoder::new()
            .with_empty_password(config.try_empty_password)
            .decode(data)?,
        #[cfg(not(feature = "pdf"))]
        DocumentKind::Pdf => return Err(DecodeError::UnsupportedFormat("pdf".to_string())),
    };

    if text.trim().is_empty() {
        return Err(DecodeError::NoText);
    }

    debug!("Decoded {:?} document: {} bytes -> {} chars", kind, data.len(), text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(DocumentKind::from_path(Path::new("cv.PDF")).unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("cv.txt")).unwrap(), DocumentKind::PlainText);
        assert!(matches!(
            DocumentKind::from_path(Path::new("cv.docx")),
            Err(DecodeError::UnsupportedFormat(ext)) if ext == "docx"
        ));
    }

    #[test]
    fn test_sniff() {
        assert_eq!(DocumentKind::sniff(b"%PDF-1.7\n..."), DocumentKind::Pdf);
        assert_eq!(DocumentKind::sniff(b"Name: Jane"), DocumentKind::PlainText);
    }

    #[test]
    fn test_detect_falls_back_to_contents() {
        assert_eq!(DocumentKind::detect(Path::new("resume"), b"%PDF-1.4").unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect(Path::new("resume"), b"Name: Jane").unwrap(), DocumentKind::PlainText);
        assert_eq!(DocumentKind::detect(Path::new("cv.txt"), b"%PDF-1.4").unwrap(), DocumentKind::PlainText);
        assert!(DocumentKind::detect(Path::new("cv.docx"), b"PK").is_err());
    }

    #[test]
    fn test_plain_text_document() {
        let text = document_to_text(b"Name: Jane Doe\n", DocumentKind::PlainText, &DocumentConfig::default())
            .unwrap();
        assert_eq!(text, "Name: Jane Doe\n");
    }

    #[test]
    fn test_blank_document_has_no_text() {
        let result = document_to_text(b"  \n\n", DocumentKind::PlainText, &DocumentConfig::default());
        assert!(matches!(result, Err(DecodeError::NoText)));
    }

    #[test]
    fn test_size_limit() {
        let config = DocumentConfig {
            max_document_bytes: 4,
            ..DocumentConfig::default()
        };
        let result = document_to_text(b"Name: Jane", DocumentKind::PlainText, &config);
        assert!(matches!(result, Err(DecodeError::TooLarge { size: 10, limit: 4 })));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_invalid_pdf_is_decode_error() {
        let result = document_to_text(b"%PDF-1.4 truncated", DocumentKind::Pdf, &DocumentConfig::default());
        assert!(result.is_err());
    }
}
