pub mod age;
pub mod decoder;
pub mod structure;

pub use age::{age_group, calculate_age, is_elderly};
pub use decoder::{decode_egyptian_id, decode_egyptian_id_at};
pub use structure::{is_structurally_valid, select_national_id};
