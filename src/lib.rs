pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod id_card_reader;

pub use id_card_reader::IdCardReader;
pub use models::{DecodedEgyptianId, OcrResult};
pub use utils::InfrastructureError;
pub use validation::decode_egyptian_id;
