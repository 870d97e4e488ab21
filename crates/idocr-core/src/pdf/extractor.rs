//! PDF text and image extraction using lopdf and pdf-extract.

use std::collections::HashSet;

use image::{DynamicImage, GrayImage, RgbImage};
use lopdf::encryption::DecryptionError;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tracing::{debug, trace};

use super::{PdfProcessor, PdfType, Result};
use crate::error::PdfError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    min_text_length: usize,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            min_text_length: 20,
        }
    }

    /// Set the minimum text length for a PDF to count as text-based.
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Classify already extracted text together with the number of embedded images.
    pub fn classify(&self, text: &str, image_count: usize) -> PdfType {
        let has_text = text.trim().len() >= self.min_text_length;
        let has_images = image_count > 0;

        let pdf_type = match (has_text, has_images) {
            (true, false) => PdfType::Text,
            (false, true) => PdfType::Image,
            (true, true) => PdfType::Hybrid,
            (false, false) => PdfType::Empty,
        };

        debug!(
            "PDF analysis: {} chars text, {} images -> {:?}",
            text.trim().len(),
            image_count,
            pdf_type
        );
        pdf_type
    }

    fn decrypt(doc: &mut Document, password: Option<&str>) -> Result<()> {
        // Owner-password-only PDFs open with an empty user password
        let result = doc.decrypt(password.unwrap_or(""));

        match result {
            Ok(()) => Ok(()),
            Err(lopdf::Error::Decryption(DecryptionError::IncorrectPassword)) => match password {
                Some(_) => Err(PdfError::InvalidPassword),
                None => Err(PdfError::Encrypted),
            },
            Err(lopdf::Error::Decryption(
                DecryptionError::UnsupportedEncryption | DecryptionError::InvalidKeyLength,
            )) => Err(PdfError::UnsupportedEncryption(encryption_scheme(doc))),
            Err(e) => Err(PdfError::Parse(format!("failed to decrypt PDF: {}", e))),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8], password: Option<&str>) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            Self::decrypt(&mut doc, password)?;
            debug!("Decrypted PDF (password supplied: {})", password.is_some());

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn analyze(&self) -> PdfType {
        let text = self.extract_text().unwrap_or_default();
        self.classify(&text, self.extract_images().len())
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_images(&self) -> Vec<DynamicImage> {
        let Some(doc) = self.document.as_ref() else {
            return Vec::new();
        };

        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut images = Vec::new();

        for (page, page_id) in doc.get_pages() {
            for id in page_xobject_ids(doc, page_id) {
                if !seen.insert(id) {
                    continue;
                }
                if let Some(image) = doc.get_object(id).ok().and_then(|obj| decode_image(doc, obj)) {
                    trace!("Page {}: image {:?} {}x{}", page, id, image.width(), image.height());
                    images.push(image);
                }
            }
        }

        // Scanners sometimes leave images unreachable from the page resources
        if images.is_empty() {
            for (id, object) in doc.objects.iter() {
                if seen.contains(id) {
                    continue;
                }
                if let Some(image) = decode_image(doc, object) {
                    images.push(image);
                }
            }
        }

        debug!("Found {} images in document", images.len());
        images
    }
}

/// Describe the encryption dictionary for error messages.
fn encryption_scheme(doc: &Document) -> String {
    let field = |key: &[u8]| {
        doc.get_encrypted()
            .and_then(|dict| dict.get(key))
            .and_then(Object::as_i64)
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "?".to_string())
    };
    format!("V={} R={} Length={}", field(b"V"), field(b"R"), field(b"Length"))
}

/// Resources of a page, inherited from the page tree when the page has none.
fn page_resources(doc: &Document, page_id: ObjectId) -> Option<&Dictionary> {
    let mut visited = HashSet::new();
    let mut node_id = page_id;

    while visited.insert(node_id) {
        let node = doc.get_dictionary(node_id).ok()?;
        if let Ok(resources) = doc.get_dict_in_dict(node, b"Resources") {
            return Some(resources);
        }
        node_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
    }

    None
}

fn page_xobject_ids(doc: &Document, page_id: ObjectId) -> Vec<ObjectId> {
    page_resources(doc, page_id)
        .and_then(|resources| doc.get_dict_in_dict(resources, b"XObject").ok())
        .map(|xobjects| {
            xobjects
                .iter()
                .filter_map(|(_, value)| value.as_reference().ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Decode an image XObject; unsupported encodings yield `None`.
fn decode_image(doc: &Document, object: &Object) -> Option<DynamicImage> {
    let Object::Stream(stream) = object else {
        return None;
    };
    let dict = &stream.dict;

    if dict.get(b"Subtype").and_then(Object::as_name).ok()? != b"Image" {
        return None;
    }

    let width = u32::try_from(dict.get(b"Width").and_then(Object::as_i64).ok()?).ok()?;
    let height = u32::try_from(dict.get(b"Height").and_then(Object::as_i64).ok()?).ok()?;
    if width == 0 || height == 0 {
        return None;
    }

    match stream.filters().ok().and_then(|filters| filters.last().copied()) {
        Some(b"DCTDecode") => {
            return image::load_from_memory_with_format(&stream.content, image::ImageFormat::Jpeg)
                .ok();
        }
        Some(b"JPXDecode" | b"CCITTFaxDecode" | b"JBIG2Decode") => {
            trace!("Skipping {}x{} image with unsupported filter", width, height);
            return None;
        }
        _ => {}
    }

    let bits = dict
        .get(b"BitsPerComponent")
        .and_then(Object::as_i64)
        .unwrap_or(8);
    if bits != 8 {
        trace!("Skipping image with {} bits per component", bits);
        return None;
    }

    decode_raw(stream, color_space(doc, dict), width, height)
}

fn color_space<'a>(doc: &'a Document, dict: &'a Dictionary) -> &'a [u8] {
    let resolved = dict
        .get(b"ColorSpace")
        .and_then(|obj| doc.dereference(obj))
        .map(|(_, obj)| obj);

    match resolved {
        Ok(Object::Name(name)) => name.as_slice(),
        Ok(Object::Array(array)) => array
            .first()
            .and_then(|obj| obj.as_name().ok())
            .unwrap_or(&b"DeviceRGB"[..]),
        _ => &b"DeviceRGB"[..],
    }
}

fn decode_raw(stream: &Stream, color_space: &[u8], width: u32, height: u32) -> Option<DynamicImage> {
    let data = stream.get_plain_content().ok()?;
    let pixels = (width as usize) * (height as usize);

    match color_space {
        b"DeviceGray" | b"G" | b"CalGray" if data.len() >= pixels => {
            GrayImage::from_raw(width, height, data[..pixels].to_vec()).map(DynamicImage::ImageLuma8)
        }
        b"DeviceRGB" | b"RGB" | b"CalRGB" if data.len() >= pixels * 3 => {
            RgbImage::from_raw(width, height, data[..pixels * 3].to_vec()).map(DynamicImage::ImageRgb8)
        }
        _ => {
            trace!(
                "Could not decode {}x{} image: colorspace={}, {} bytes",
                width,
                height,
                String::from_utf8_lossy(color_space),
                data.len()
            );
            None
        }
    }
}
