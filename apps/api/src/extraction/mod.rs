//! Text extraction from uploaded resumes.
//!
//! Dispatch is by the declared MIME type only: PDF, Word (OOXML), or anything
//! else treated as plain text with a Latin-1 fallback.

use thiserror::Error;

pub mod pdf;
pub mod plain;
pub mod word;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_DOC: &str = "application/msword";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Word document extraction failed: {0}")]
    Word(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Word,
    PlainText,
}

impl DocumentKind {
    /// Maps a declared MIME type to an extractor. Parameters such as
    /// `; charset=utf-8` are ignored; unknown or missing types are plain text.
    pub fn from_mime(mime: Option<&str>) -> Self {
        let essence = mime
            .and_then(|m| m.split(';').next())
            .map(|m| m.trim().to_ascii_lowercase());
        match essence.as_deref() {
            Some(MIME_PDF) => DocumentKind::Pdf,
            Some(MIME_DOCX) | Some(MIME_DOC) => DocumentKind::Word,
            _ => DocumentKind::PlainText,
        }
    }
}

/// Extracts best-effort plain text from an uploaded file.
pub fn extract_text(bytes: &[u8], mime: Option<&str>) -> Result<String, ExtractionError> {
    match DocumentKind::from_mime(mime) {
        DocumentKind::Pdf => pdf::extract(bytes),
        DocumentKind::Word => word::extract(bytes),
        DocumentKind::PlainText => Ok(plain::decode(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_known_mime_types() {
        assert_eq!(DocumentKind::from_mime(Some(MIME_PDF)), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_mime(Some(MIME_DOCX)), DocumentKind::Word);
        assert_eq!(DocumentKind::from_mime(Some(MIME_DOC)), DocumentKind::Word);
    }

    #[test]
    fn test_kind_ignores_parameters_and_case() {
        assert_eq!(
            DocumentKind::from_mime(Some("Application/PDF; name=cv.pdf")),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_kind_defaults_to_plain_text() {
        assert_eq!(DocumentKind::from_mime(Some("text/plain")), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_mime(Some("image/png")), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_mime(None), DocumentKind::PlainText);
    }

    #[test]
    fn test_plain_text_dispatch() {
        let text = extract_text(b"Python developer", Some("text/plain")).unwrap();
        assert_eq!(text, "Python developer");
    }

    #[test]
    fn test_pdf_text_layer_is_extracted() {
        let text = extract_text(include_bytes!("../../fixtures/resume.pdf"), Some(MIME_PDF)).unwrap();
        for word in ["Python", "SQL", "developer"] {
            assert!(text.contains(word), "missing {word:?} in {text:?}");
        }
    }

    #[test]
    fn test_corrupt_pdf_is_an_error() {
        let err = extract_text(b"not a pdf at all", Some(MIME_PDF)).unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[test]
    fn test_legacy_doc_bytes_are_an_error() {
        let err = extract_text(b"\xD0\xCF\x11\xE0 binary doc", Some(MIME_DOC)).unwrap_err();
        assert!(matches!(err, ExtractionError::Word(_)));
    }
}
