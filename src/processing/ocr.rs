use crate::models::RecognizedText;
use crate::processing::ImageProcessor;
use crate::utils::InfrastructureError;
use log::{debug, warn};

/// An OCR engine. Implementations may be slow and always return best-effort
/// text; only engine or image failures are errors.
pub trait TextRecognizer {
    fn recognize(&self, image_data: &[u8]) -> Result<RecognizedText, InfrastructureError>;
}

impl<R: TextRecognizer + ?Sized> TextRecognizer for &R {
    fn recognize(&self, image_data: &[u8]) -> Result<RecognizedText, InfrastructureError> {
        (**self).recognize(image_data)
    }
}

impl<R: TextRecognizer + ?Sized> TextRecognizer for Box<R> {
    fn recognize(&self, image_data: &[u8]) -> Result<RecognizedText, InfrastructureError> {
        (**self).recognize(image_data)
    }
}

/// Highest-confidence result; on ties the earliest one is kept.
pub fn select_best(results: Vec<RecognizedText>) -> Option<RecognizedText> {
    results.into_iter().fold(None, |best, current| match best {
        Some(top) if top.confidence >= current.confidence => Some(top),
        _ => Some(current),
    })
}

/// Runs the inner engine over every preprocessed variant of the image and
/// keeps the most confident reading. Variants that fail are skipped; if all
/// of them fail the last error is returned.
pub struct PreprocessingRecognizer<R> {
    inner: R,
}

impl<R: TextRecognizer> PreprocessingRecognizer<R> {
    pub fn new(inner: R) -> Self {
        PreprocessingRecognizer { inner }
    }
}

impl<R: TextRecognizer> TextRecognizer for PreprocessingRecognizer<R> {
    fn recognize(&self, image_data: &[u8]) -> Result<RecognizedText, InfrastructureError> {
        let variants = ImageProcessor::variants(image_data)?;

        let mut readings = Vec::with_capacity(variants.len());
        let mut last_error = None;
        for (index, variant) in variants.iter().enumerate() {
            match self.inner.recognize(variant) {
                Ok(reading) => {
                    debug!("Variant {} recognized with confidence {:.1}", index, reading.confidence);
                    readings.push(reading);
                }
                Err(e) => {
                    warn!("OCR failed on image variant {}: {}", index, e);
                    last_error = Some(e);
                }
            }
        }

        match select_best(readings) {
            Some(best) => Ok(best),
            None => Err(last_error.unwrap_or_else(|| {
                InfrastructureError::OcrEngine("No image variants to recognize".to_string())
            })),
        }
    }
}

#[cfg(feature = "tesseract")]
pub use self::tesseract_engine::TesseractRecognizer;

#[cfg(feature = "tesseract")]
mod tesseract_engine {
    use super::TextRecognizer;
    use crate::models::RecognizedText;
    use crate::utils::config::DEFAULT_LANGUAGES;
    use crate::utils::InfrastructureError;
    use log::info;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tesseract::Tesseract;

    /// Tesseract through its C API. Needs the language packs named in
    /// `languages` installed on the host.
    pub struct TesseractRecognizer {
        languages: String,
    }

    impl TesseractRecognizer {
        pub fn new(languages: impl Into<String>) -> Self {
            TesseractRecognizer {
                languages: languages.into(),
            }
        }
    }

    impl Default for TesseractRecognizer {
        fn default() -> Self {
            Self::new(DEFAULT_LANGUAGES)
        }
    }

    impl TextRecognizer for TesseractRecognizer {
        fn recognize(&self, image_data: &[u8]) -> Result<RecognizedText, InfrastructureError> {
            let mut temp_file = tempfile::Builder::new().suffix(".png").tempfile()?;
            temp_file.write_all(image_data)?;
            let path = temp_file_path(&temp_file)?;

            let mut tess = Tesseract::new(None, Some(self.languages.as_str()))
                .map_err(|e| InfrastructureError::OcrEngine(format!("Tesseract init error: {}", e)))?
                .set_image(path)
                .map_err(|e| InfrastructureError::OcrEngine(format!("Tesseract set image error: {}", e)))?
                .recognize()
                .map_err(|e| InfrastructureError::OcrEngine(format!("Tesseract recognize error: {}", e)))?;

            let confidence = tess.mean_text_conf() as f32;
            let text = tess
                .get_text()
                .map_err(|e| InfrastructureError::OcrEngine(format!("Tesseract error: {}", e)))?;

            info!("Tesseract read {} characters, confidence {}", text.chars().count(), confidence);
            Ok(RecognizedText::new(text, confidence))
        }
    }

    fn temp_file_path(temp_file: &NamedTempFile) -> Result<&str, InfrastructureError> {
        temp_file
            .path()
            .to_str()
            .ok_or_else(|| InfrastructureError::OcrEngine("Failed to convert path to string".to_string()))
    }
}
