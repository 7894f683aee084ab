use crate::utils::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LANGUAGES: &str = "ara+eng";
pub const DEFAULT_PREVIEW_CHARS: usize = 500;
pub const DEFAULT_ELDERLY_AGE_THRESHOLD: u32 = 60;

/// Reader settings, loadable from a JSON file. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Tesseract language string
    pub languages: String,
    /// How many characters of raw OCR text to echo back in `OcrResult::text`
    pub preview_chars: usize,
    /// Run OCR over several preprocessed image variants and keep the best
    pub preprocess: bool,
    pub elderly_age_threshold: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            languages: DEFAULT_LANGUAGES.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            preprocess: true,
            elderly_age_threshold: DEFAULT_ELDERLY_AGE_THRESHOLD,
        }
    }
}

impl ReaderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
