pub mod candidates;
pub mod extractors;
pub mod image;
pub mod numerals;
pub mod ocr;

pub use candidates::extract_candidates;
pub use extractors::{extract_address, extract_full_name};
pub use self::image::ImageProcessor;
pub use numerals::normalize_digits;
pub use ocr::{select_best, PreprocessingRecognizer, TextRecognizer};

#[cfg(feature = "tesseract")]
pub use ocr::TesseractRecognizer;
