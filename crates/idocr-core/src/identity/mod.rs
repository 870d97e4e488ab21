//! Identity document field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, IdentityParser};

use crate::models::record::ExtractedRecord;
use crate::ocr::OcrResult;

/// Trait for identity record extractors.
pub trait RecordExtractor {
    /// Extract a record from an OCR result.
    fn extract(&self, ocr_result: &OcrResult) -> ExtractedRecord;

    /// Extract a record from plain text.
    fn extract_from_text(&self, text: &str) -> ExtractedRecord;
}

/// Extract all identity fields from document text.
///
/// Total and pure: unmatched fields are left empty and the same input always
/// yields the same record.
pub fn extract(text: &str) -> ExtractedRecord {
    IdentityParser::new().extract_from_text(text)
}
