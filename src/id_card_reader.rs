use crate::models::OcrResult;
use crate::processing::*;
use crate::utils::{InfrastructureError, ReaderConfig};
use crate::validation::*;
use log::info;

pub struct IdCardReader<R> {
    recognizer: R,
    config: ReaderConfig,
}

impl<R: TextRecognizer> IdCardReader<R> {
    pub fn new(recognizer: R) -> Self {
        Self::with_config(recognizer, ReaderConfig::default())
    }

    pub fn with_config(recognizer: R, config: ReaderConfig) -> Self {
        IdCardReader { recognizer, config }
    }

    /// Run OCR on a card photo and pull out the ID, name and address.
    ///
    /// Errors only when the OCR engine or image handling fails. A card with
    /// nothing legible still returns `Ok`, with `None` fields.
    pub fn extract_data_from_id_card(&self, image_data: &[u8]) -> Result<OcrResult, InfrastructureError> {
        info!("Starting OCR on {} byte image", image_data.len());

        // Step 1: Recognize text
        let recognized = self.recognizer.recognize(image_data)?;
        info!(
            "OCR produced {} characters at confidence {:.1}",
            recognized.text.chars().count(),
            recognized.confidence
        );

        // Step 2: Extract fields from the text
        Ok(self.extract_from_text(&recognized.text))
    }
}

impl IdCardReader<()> {
    /// Reader for text that was recognized elsewhere; it has no OCR engine.
    pub fn text_only(config: ReaderConfig) -> Self {
        IdCardReader { recognizer: (), config }
    }
}

impl<R> IdCardReader<R> {
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Field extraction over text that has already been recognized
    pub fn extract_from_text(&self, raw_text: &str) -> OcrResult {
        let normalized = normalize_digits(raw_text);

        let candidates = extract_candidates(&normalized);
        let national_id = select_national_id(&candidates, &normalized);
        let decoded_info = national_id.as_deref().map(decode_egyptian_id);

        let lines: Vec<&str> = raw_text.lines().filter(|line| !line.trim().is_empty()).collect();
        let full_name = extract_full_name(&lines);
        let address = extract_address(&lines);

        info!(
            "Extraction finished: national_id={} valid={} name={} address={}",
            national_id.is_some(),
            decoded_info.as_ref().map_or(false, |d| d.is_valid),
            full_name.is_some(),
            address.is_some()
        );

        OcrResult {
            national_id,
            full_name,
            address,
            text: raw_text.chars().take(self.config.preview_chars).collect(),
            decoded_info,
        }
    }
}
