//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

#[cfg(test)]
pub(crate) use extractor::tests::{sample_pdf, sample_pdf_with_image};

use crate::error::PdfError;
use image::DynamicImage;

/// Type of PDF content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Contains extractable text.
    Text,
    /// Contains only images (scanned document).
    Image,
    /// Contains both text and images.
    Hybrid,
    /// Neither enough text nor any decodable image.
    Empty,
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes, decrypting it with `password` when encrypted.
    fn load(&mut self, data: &[u8], password: Option<&str>) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Analyze the PDF to determine its type.
    fn analyze(&self) -> PdfType;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract embedded images, in page order.
    fn extract_images(&self) -> Vec<DynamicImage>;
}
