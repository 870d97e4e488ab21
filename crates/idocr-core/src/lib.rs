//! Core library for identity document OCR processing.
//!
//! This crate provides:
//! - PDF text extraction (including password-protected documents)
//! - OCR pipeline for scanned images using PaddleOCR models
//! - Identity document field extraction (identifier, name, guardian, DOB,
//!   gender, address components, postal code, phone)
//! - An HTTP extraction endpoint (feature `api`)

pub mod error;
pub mod models;
pub mod pdf;
pub mod ocr;
pub mod identity;
pub mod ingest;

#[cfg(feature = "api")]
pub mod api;

pub use error::{IdocrError, IngestError, OcrError, PdfError, Result};
pub use models::record::ExtractedRecord;
pub use models::config::IdocrConfig;
pub use pdf::{PdfExtractor, PdfProcessor, PdfType};
pub use ocr::{ImagePreprocessor, OcrResult, TextBox};
#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
pub use identity::{extract, ExtractionResult, IdentityParser, RecordExtractor};
pub use ingest::{DocumentIngestor, DocumentKind, NativeIngestor, Upload};
