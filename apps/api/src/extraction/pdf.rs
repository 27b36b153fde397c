use crate::extraction::ExtractionError;

/// Concatenated text of every page. Pages without a text layer contribute nothing.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}
