//! Pure Rust OCR engine wrapper using `pure-onnx-ocr`.

use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::error::OcrError;
use crate::models::config::IdocrConfig;

use super::{ImagePreprocessor, OcrResult, TextBox};

/// OCR engine backed by `pure-onnx-ocr` (pure Rust, no external ONNX Runtime).
pub struct PureOcrEngine {
    engine: pure_onnx_ocr::engine::OcrEngine,
    preprocessor: ImagePreprocessor,
    keep_unk: bool,
}

impl PureOcrEngine {
    /// Create an engine from the model files named in the configuration.
    pub fn from_config(config: &IdocrConfig) -> Result<Self, OcrError> {
        if config.ocr.rec_batch_size == 0 {
            return Err(OcrError::ModelLoad(
                "rec_batch_size must be greater than zero".to_string(),
            ));
        }

        let det_path = config.model_path(&config.models.detection_model);
        let rec_path = config.model_path(&config.models.recognition_model);
        let dict_path = config.model_path(&config.models.dictionary);

        for path in [&det_path, &rec_path, &dict_path] {
            if !path.exists() {
                return Err(OcrError::ModelLoad(format!(
                    "model file not found: {}",
                    path.display()
                )));
            }
        }

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&det_path)
            .rec_model_path(&rec_path)
            .dictionary_path(&dict_path)
            .rec_batch_size(config.ocr.rec_batch_size)
            .build()
            .map_err(|e| OcrError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!(
            "Loaded pure-onnx-ocr engine from {}",
            config.models.model_dir.display()
        );

        Ok(Self {
            engine,
            preprocessor: ImagePreprocessor::from_config(&config.ocr),
            keep_unk: config.ocr.keep_unk,
        })
    }

    /// Process an image and extract text with bounding boxes.
    pub fn process(&self, image: &DynamicImage) -> Result<OcrResult, OcrError> {
        let start = Instant::now();
        let (width, height) = image.dimensions();

        if width == 0 || height == 0 {
            return Err(OcrError::InvalidImage(format!("{}x{}", width, height)));
        }

        info!("Processing image: {}x{}", width, height);

        let prepared = self.preprocessor.prepare(image);

        let results = self
            .engine
            .run_from_image(&prepared)
            .map_err(|e| OcrError::Recognition(format!("pure-onnx-ocr: {}", e)))?;

        debug!("pure-onnx-ocr returned {} text regions", results.len());

        let text_boxes: Vec<TextBox> = results
            .iter()
            .map(|r| TextBox {
                bbox: polygon_to_bbox(&r.bounding_box),
                text: if self.keep_unk {
                    r.text.clone()
                } else {
                    r.text.replace("[UNK]", " ")
                },
                confidence: r.confidence,
            })
            .collect();

        let processing_time_ms = start.elapsed().as_millis() as u64;
        let result = OcrResult::from_boxes(text_boxes, (width, height), processing_time_ms);

        info!(
            "OCR complete: {} text boxes in {}ms",
            result.boxes.len(),
            processing_time_ms
        );

        Ok(result)
    }

    /// Convenience: extract text only.
    pub fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError> {
        Ok(self.process(image)?.text)
    }
}

/// Convert a `Polygon<f64>` to our `[f32; 8]` bbox format.
///
/// Extracts the first 4 exterior points (quadrilateral) as
/// `[x1, y1, x2, y2, x3, y3, x4, y4]`.
fn polygon_to_bbox(polygon: &pure_onnx_ocr::Polygon<f64>) -> [f32; 8] {
    let mut bbox = [0.0f32; 8];
    for (i, coord) in polygon.exterior().coords().take(4).enumerate() {
        bbox[i * 2] = coord.x as f32;
        bbox[i * 2 + 1] = coord.y as f32;
    }
    bbox
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_models_reported() {
        let mut config = IdocrConfig::default();
        config.models.model_dir = std::path::PathBuf::from("/nonexistent/idocr/models");

        match PureOcrEngine::from_config(&config) {
            Err(OcrError::ModelLoad(msg)) => assert!(msg.contains("det.onnx")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("engine should not load without models"),
        }
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let mut config = IdocrConfig::default();
        config.ocr.rec_batch_size = 0;

        match PureOcrEngine::from_config(&config) {
            Err(OcrError::ModelLoad(msg)) => assert!(msg.contains("rec_batch_size")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("engine should not load with an empty batch"),
        }
    }
}
