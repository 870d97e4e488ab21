//! Image preprocessing for OCR.

use image::{DynamicImage, GenericImageView, GrayImage, Luma};
use tracing::debug;

use crate::models::config::OcrConfig;

/// Image preprocessor for the OCR pipeline.
pub struct ImagePreprocessor {
    /// Maximum image dimension.
    max_size: u32,
    /// Binarize with an adaptive threshold.
    enhance: bool,
    /// Side of the square window used for the local mean.
    block_size: u32,
    /// Offset subtracted from the local mean.
    threshold_offset: i64,
}

impl ImagePreprocessor {
    /// Create a new preprocessor with default settings.
    pub fn new() -> Self {
        Self {
            max_size: 2048,
            enhance: false,
            block_size: 15,
            threshold_offset: 5,
        }
    }

    /// Create a preprocessor from OCR configuration.
    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new()
            .with_max_size(config.max_image_size)
            .with_enhance(config.enhance)
    }

    /// Set maximum image dimension.
    pub fn with_max_size(mut self, size: u32) -> Self {
        self.max_size = size;
        self
    }

    /// Enable or disable binarization.
    pub fn with_enhance(mut self, enhance: bool) -> Self {
        self.enhance = enhance;
        self
    }

    /// Prepare an image for recognition.
    pub fn prepare(&self, image: &DynamicImage) -> DynamicImage {
        let (width, height) = image.dimensions();
        let (new_width, new_height) = self.calculate_resize_dimensions(width, height);

        let resized = if (new_width, new_height) != (width, height) {
            debug!("Resizing image {}x{} -> {}x{}", width, height, new_width, new_height);
            image.resize_exact(new_width, new_height, image::imageops::FilterType::Lanczos3)
        } else {
            image.clone()
        };

        if self.enhance {
            self.binarize(&resized)
        } else {
            resized
        }
    }

    /// Convert to grayscale and apply an adaptive threshold.
    pub fn binarize(&self, image: &DynamicImage) -> DynamicImage {
        let gray = image.to_luma8();
        DynamicImage::ImageLuma8(self.adaptive_threshold(&gray))
    }

    fn calculate_resize_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let max_dim = width.max(height);

        if max_dim <= self.max_size || self.max_size == 0 {
            return (width, height);
        }

        let scale = self.max_size as f32 / max_dim as f32;
        let new_width = (width as f32 * scale) as u32;
        let new_height = (height as f32 * scale) as u32;

        (new_width.max(1), new_height.max(1))
    }

    fn adaptive_threshold(&self, image: &GrayImage) -> GrayImage {
        let (width, height) = image.dimensions();
        let (w, h) = (width as usize, height as usize);

        // Summed-area table with a zero row and column in front.
        let mut integral = vec![0u64; (w + 1) * (h + 1)];
        for y in 0..h {
            let mut row_sum = 0u64;
            for x in 0..w {
                row_sum += image.get_pixel(x as u32, y as u32)[0] as u64;
                integral[(y + 1) * (w + 1) + x + 1] = integral[y * (w + 1) + x + 1] + row_sum;
            }
        }

        let half_block = (self.block_size / 2) as usize;
        let mut result = GrayImage::new(width, height);

        for y in 0..h {
            let y0 = y.saturating_sub(half_block);
            let y1 = (y + half_block + 1).min(h);
            for x in 0..w {
                let x0 = x.saturating_sub(half_block);
                let x1 = (x + half_block + 1).min(w);

                let sum = integral[y1 * (w + 1) + x1] + integral[y0 * (w + 1) + x0]
                    - integral[y0 * (w + 1) + x1]
                    - integral[y1 * (w + 1) + x0];
                let count = ((y1 - y0) * (x1 - x0)) as u64;

                let mean = (sum / count) as i64;
                let pixel_value = image.get_pixel(x as u32, y as u32)[0] as i64;
                let output = if pixel_value > mean - self.threshold_offset { 255 } else { 0 };
                result.put_pixel(x as u32, y as u32, Luma([output]));
            }
        }

        result
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_dimensions() {
        let preprocessor = ImagePreprocessor::new().with_max_size(960);

        // Image smaller than target
        let (w, h) = preprocessor.calculate_resize_dimensions(500, 300);
        assert_eq!((w, h), (500, 300));

        // Image larger than target
        let (w, h) = preprocessor.calculate_resize_dimensions(1920, 1080);
        assert_eq!(w, 960);
        assert!(h < 960);
    }

    #[test]
    fn test_prepare_downscales() {
        let image = DynamicImage::new_rgb8(400, 200);
        let prepared = ImagePreprocessor::new().with_max_size(100).prepare(&image);
        assert_eq!(prepared.dimensions(), (100, 50));
    }

    #[test]
    fn test_binarize_separates_dark_text() {
        let mut gray = GrayImage::from_pixel(30, 30, Luma([220]));
        for x in 10..20 {
            gray.put_pixel(x, 15, Luma([20]));
        }

        let binary = ImagePreprocessor::new()
            .binarize(&DynamicImage::ImageLuma8(gray))
            .to_luma8();

        assert_eq!(binary.get_pixel(15, 15)[0], 0);
        assert_eq!(binary.get_pixel(2, 2)[0], 255);
    }
}
