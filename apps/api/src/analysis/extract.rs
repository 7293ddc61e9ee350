//! Document text extraction for résumé uploads.
//! PDF bytes go through `pdf-extract`; anything else is treated as UTF-8 text.

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Extracts plain text from an uploaded document.
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    let text = if data.starts_with(PDF_MAGIC) {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Validation(format!("could not extract text from PDF: {e}")))?
    } else {
        std::str::from_utf8(data)
            .map_err(|_| {
                AppError::Validation("document must be a PDF or UTF-8 text file".to_string())
            })?
            .to_string()
    };

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "document contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}
