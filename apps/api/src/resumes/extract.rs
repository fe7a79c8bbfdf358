//! Document text extraction. Turns stored resume bytes into plain text, or
//! nothing at all: a document that cannot be parsed contributes no text and
//! no match, and the failure is logged rather than raised.

use tracing::warn;

use crate::resumes::docx;

/// Supported resume formats, keyed off the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Format for a stored filename, or `None` when the extension is missing
    /// or outside the allowed set.
    pub fn from_filename(name: &str) -> Option<Self> {
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Self::from_extension(ext)
    }
}

/// Extracts plain text from document bytes.
///
/// Page and paragraph boundaries collapse to `\n`; outer whitespace is
/// trimmed. Identical bytes always produce identical output. Any parse
/// failure returns `None` with a warning logged; no partial text is surfaced.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Option<String> {
    let text = match format {
        DocumentFormat::Pdf => match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("PDF text extraction failed: {e}");
                return None;
            }
        },
        DocumentFormat::Docx => match docx::read_document_text(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("DOCX text extraction failed: {e:#}");
                return None;
            }
        },
    };

    Some(text.trim().to_string())
}
