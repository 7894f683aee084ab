pub mod data;
pub mod governorates;

pub use data::{AgeProfile, Century, DecodedEgyptianId, Gender, OcrResult, RecognizedText};
pub use governorates::{all_governorates, governorate_from_code};
