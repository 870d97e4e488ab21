//! Error types for the idocr-core library.

use thiserror::Error;

/// Main error type for the idocr library.
#[derive(Error, Debug)]
pub enum IdocrError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Document ingestion error.
    #[error("ingestion error: {0}")]
    Ingest(#[from] IngestError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and no password was supplied.
    #[error("PDF is encrypted and requires a password")]
    Encrypted,

    /// The supplied password does not open the PDF.
    #[error("incorrect PDF password")]
    InvalidPassword,

    /// The PDF uses an encryption scheme that cannot be decrypted here.
    #[error("unsupported PDF encryption: {0}")]
    UnsupportedEncryption(String),

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Errors raised while turning an upload into text.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The upload carried no bytes.
    #[error("uploaded file is empty")]
    Empty,

    /// The upload is neither a PDF, an image, nor plain text.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// OCR models are not installed where the configuration points.
    #[error("OCR models not available: {0}")]
    OcrUnavailable(String),

    /// PDF could not be read.
    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// OCR run failed.
    #[error(transparent)]
    Ocr(#[from] OcrError),

    /// Image could not be decoded.
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for the idocr library.
pub type Result<T> = std::result::Result<T, IdocrError>;
