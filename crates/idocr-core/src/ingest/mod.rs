//! Turning uploaded documents into text.
//!
//! PDFs are read through their embedded text layer, falling back to OCR of
//! the embedded images for scans. Images go through OCR and plain text
//! passes straight through.

#[cfg(feature = "native")]
use std::sync::Mutex;

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::error::IngestError;
use crate::models::config::IdocrConfig;
use crate::pdf::{PdfExtractor, PdfProcessor, PdfType};

#[cfg(feature = "native")]
use crate::ocr::PureOcrEngine;

/// Result type for ingestion.
pub type Result<T> = std::result::Result<T, IngestError>;

/// An uploaded document.
#[derive(Debug, Clone, Default)]
pub struct Upload {
    /// File contents.
    pub data: Vec<u8>,
    /// Client-supplied file name.
    pub file_name: Option<String>,
    /// Client-supplied MIME type.
    pub content_type: Option<String>,
    /// Password for encrypted PDFs.
    pub password: Option<String>,
}

impl Upload {
    /// Create an upload from raw bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            ..Default::default()
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the PDF password; blank passwords count as none.
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password.filter(|p| !p.is_empty());
        self
    }

    /// Detect the document kind.
    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::detect(self)
    }
}

/// Kind of uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF, read through its text layer or its embedded images.
    Pdf,
    /// Raster image that needs OCR.
    Image,
    /// Already-extracted text.
    Text,
}

const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp", "gif"];

impl DocumentKind {
    /// Detect the kind from file name extension, then MIME type, then content.
    pub fn detect(upload: &Upload) -> Option<Self> {
        let from_extension = upload
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .and_then(|(_, ext)| Self::from_extension(ext));

        from_extension
            .or_else(|| upload.content_type.as_deref().and_then(Self::from_mime))
            .or_else(|| Self::sniff(&upload.data))
    }

    fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" | "text" => Some(DocumentKind::Text),
            ext if IMAGE_EXTENSIONS.contains(&ext) => Some(DocumentKind::Image),
            _ => None,
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.to_ascii_lowercase();
        if mime == "application/pdf" {
            Some(DocumentKind::Pdf)
        } else if mime.starts_with("image/") {
            Some(DocumentKind::Image)
        } else if mime.starts_with("text/plain") {
            Some(DocumentKind::Text)
        } else {
            None
        }
    }

    fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"%PDF-") {
            Some(DocumentKind::Pdf)
        } else if image::guess_format(data).is_ok() {
            Some(DocumentKind::Image)
        } else {
            None
        }
    }
}

/// Trait for turning an upload into text.
pub trait DocumentIngestor: Send + Sync {
    /// Extract the document text.
    fn ingest(&self, upload: &Upload) -> Result<String>;
}

/// Ingestor using the embedded PDF text layer and the local OCR models.
pub struct NativeIngestor {
    config: IdocrConfig,
    #[cfg(feature = "native")]
    engine: Mutex<Option<PureOcrEngine>>,
}

impl NativeIngestor {
    /// Create an ingestor; OCR models are loaded on the first image.
    pub fn new(config: IdocrConfig) -> Self {
        Self {
            config,
            #[cfg(feature = "native")]
            engine: Mutex::new(None),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &IdocrConfig {
        &self.config
    }

    fn ingest_pdf(&self, upload: &Upload) -> Result<String> {
        let mut extractor =
            PdfExtractor::new().with_min_text_length(self.config.pdf.min_text_length);
        extractor.load(&upload.data, upload.password.as_deref())?;

        let text = extractor.extract_text()?;
        let images = extractor.extract_images();

        match extractor.classify(&text, images.len()) {
            PdfType::Text | PdfType::Hybrid => Ok(text),
            PdfType::Image => {
                info!(
                    "PDF has no text layer, running OCR on {} embedded images",
                    images.len()
                );
                let ocr_text = self.ocr_images(&images)?;
                if ocr_text.trim().is_empty() {
                    warn!("OCR found no text in the embedded images");
                    return Ok(text);
                }
                Ok(ocr_text)
            }
            PdfType::Empty => {
                warn!(
                    "PDF has {} pages but neither embedded text nor decodable images",
                    extractor.page_count()
                );
                Ok(text)
            }
        }
    }

    fn ingest_image(&self, upload: &Upload) -> Result<String> {
        let image = image::load_from_memory(&upload.data)?;
        self.ocr_images(std::slice::from_ref(&image))
    }

    /// OCR each image in order; non-empty results are joined by blank lines.
    #[cfg(feature = "native")]
    fn ocr_images(&self, images: &[DynamicImage]) -> Result<String> {
        let mut engine = self
            .engine
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if engine.is_none() {
            if !self.config.has_ocr_models() {
                return Err(IngestError::OcrUnavailable(format!(
                    "no models in {}",
                    self.config.models.model_dir.display()
                )));
            }
            *engine = Some(PureOcrEngine::from_config(&self.config)?);
        }

        let Some(engine) = engine.as_ref() else {
            return Err(IngestError::OcrUnavailable("engine not initialized".to_string()));
        };

        // Lone image: its recognition error fails the request
        if let [image] = images {
            return Ok(engine.extract_text(image)?);
        }

        let mut pages = Vec::new();
        for (i, image) in images.iter().enumerate() {
            match engine.extract_text(image) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => debug!("No text detected in image {}", i + 1),
                Err(e) => warn!("OCR failed for image {}: {}", i + 1, e),
            }
        }

        Ok(pages.join("\n\n"))
    }

    #[cfg(not(feature = "native"))]
    fn ocr_images(&self, _images: &[DynamicImage]) -> Result<String> {
        Err(IngestError::OcrUnavailable(
            "built without the `native` feature".to_string(),
        ))
    }
}

impl DocumentIngestor for NativeIngestor {
    fn ingest(&self, upload: &Upload) -> Result<String> {
        if upload.data.is_empty() {
            return Err(IngestError::Empty);
        }

        let kind = upload.kind().ok_or_else(|| {
            IngestError::UnsupportedFormat(
                upload
                    .file_name
                    .clone()
                    .or_else(|| upload.content_type.clone())
                    .unwrap_or_else(|| "unknown".to_string()),
            )
        })?;

        info!(
            "Ingesting {:?} document ({} bytes)",
            kind,
            upload.data.len()
        );

        let text = match kind {
            DocumentKind::Pdf => self.ingest_pdf(upload)?,
            DocumentKind::Image => self.ingest_image(upload)?,
            DocumentKind::Text => String::from_utf8_lossy(&upload.data).into_owned(),
        };

        debug!("Ingested {} characters of text", text.len());
        Ok(text)
    }
}
