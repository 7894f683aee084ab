use crate::utils::InfrastructureError;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageOutputFormat};
use imageproc::contrast::{equalize_histogram, otsu_level, threshold};
use log::debug;
use std::io::Cursor;

/// Narrow phone photos are upscaled to at least this width before OCR
pub const MIN_OCR_WIDTH: u32 = 1200;

pub struct ImageProcessor;

impl ImageProcessor {
    /// PNG-encoded variants of a card photo for best-of-N OCR:
    /// the original, an equalized grayscale, an Otsu binarization, and
    /// (for narrow images) an upscaled grayscale.
    pub fn variants(image_data: &[u8]) -> Result<Vec<Vec<u8>>, InfrastructureError> {
        let img = image::load_from_memory(image_data)
            .map_err(|e| InfrastructureError::ImageDecode(format!("Failed to open image: {}", e)))?;

        let gray = img.to_luma8();
        let equalized = equalize_histogram(&gray);
        let binarized = threshold(&equalized, otsu_level(&equalized));

        let mut variants = vec![
            Self::encode_png(&img)?,
            Self::encode_png(&DynamicImage::ImageLuma8(equalized.clone()))?,
            Self::encode_png(&DynamicImage::ImageLuma8(binarized))?,
        ];

        if let Some(upscaled) = Self::upscale(&equalized) {
            variants.push(Self::encode_png(&DynamicImage::ImageLuma8(upscaled))?);
        }

        debug!("Prepared {} image variants for OCR", variants.len());
        Ok(variants)
    }

    fn upscale(img: &GrayImage) -> Option<GrayImage> {
        let (width, height) = img.dimensions();
        if width == 0 || width >= MIN_OCR_WIDTH {
            return None;
        }
        let new_height = ((height as u64 * MIN_OCR_WIDTH as u64) / width as u64).max(1) as u32;
        Some(image::imageops::resize(img, MIN_OCR_WIDTH, new_height, FilterType::Lanczos3))
    }

    fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, InfrastructureError> {
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageOutputFormat::Png)
            .map_err(|e| InfrastructureError::ImageEncode(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = GrayImage::from_fn(width, height, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                Luma([30u8])
            } else {
                Luma([220u8])
            }
        });
        ImageProcessor::encode_png(&DynamicImage::ImageLuma8(img)).unwrap()
    }

    #[test]
    fn test_narrow_image_gets_upscaled_variant() {
        let variants = ImageProcessor::variants(&sample_png(64, 32)).unwrap();
        assert_eq!(variants.len(), 4);

        let upscaled = image::load_from_memory(&variants[3]).unwrap();
        assert_eq!(upscaled.width(), MIN_OCR_WIDTH);
        assert_eq!(upscaled.height(), 600);
    }

    #[test]
    fn test_wide_image_skips_upscale() {
        let variants = ImageProcessor::variants(&sample_png(MIN_OCR_WIDTH, 8)).unwrap();
        assert_eq!(variants.len(), 3);
    }

    #[test]
    fn test_binarized_variant_is_two_tone() {
        let variants = ImageProcessor::variants(&sample_png(32, 32)).unwrap();
        let binarized = image::load_from_memory(&variants[2]).unwrap().to_luma8();
        assert!(binarized.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn test_garbage_bytes_are_decode_errors() {
        let err = ImageProcessor::variants(b"not an image").unwrap_err();
        assert!(matches!(err, InfrastructureError::ImageDecode(_)));
    }
}
