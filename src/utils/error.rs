use thiserror::Error;

/// Failures of the machinery around the extraction core: image decoding,
/// the OCR engine, or the filesystem. "Nothing recognized" is never one of
/// these; absent fields are reported as `None` in the result instead.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("Image encode error: {0}")]
    ImageEncode(String),
    #[error("OCR engine error: {0}")]
    OcrEngine(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Malformed config file: {0}")]
    Parse(#[from] serde_json::Error),
}
