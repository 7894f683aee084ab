use chrono::{Datelike, Local};

use crate::models::governorates::governorate_from_code;
use crate::models::{Century, DecodedEgyptianId, Gender};
use crate::processing::candidates::NATIONAL_ID_LENGTH;

pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Decode a national ID against the current calendar year.
pub fn decode_egyptian_id(national_id: &str) -> DecodedEgyptianId {
    decode_egyptian_id_at(national_id, Local::now().year())
}

/// Decode a 14-digit national ID.
///
/// Layout: `C YY MM DD GG SSS X K`, where C is the century digit, GG the
/// birthplace code, and X (index 12) the sex digit.
///
/// Century digit 1 (1800s) parses, but every such year falls below
/// `MIN_BIRTH_YEAR`, so those IDs always come back invalid.
pub fn decode_egyptian_id_at(national_id: &str, current_year: i32) -> DecodedEgyptianId {
    if national_id.len() != NATIONAL_ID_LENGTH || !national_id.bytes().all(|b| b.is_ascii_digit()) {
        return DecodedEgyptianId::invalid();
    }

    let digit = |i: usize| u32::from(national_id.as_bytes()[i] - b'0');
    let pair = |i: usize| digit(i) * 10 + digit(i + 1);

    let century = match Century::from_digit(digit(0)) {
        Some(century) => century,
        None => return DecodedEgyptianId::invalid(),
    };
    let year = century.base_year() + pair(1) as i32;

    let month = pair(3);
    let day = pair(5);
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return DecodedEgyptianId::invalid();
    }

    if year < MIN_BIRTH_YEAR || year > current_year {
        return DecodedEgyptianId::invalid();
    }

    DecodedEgyptianId {
        national_id: Some(national_id.to_string()),
        birth_date: Some(format!("{:04}-{:02}-{:02}", year, month, day)),
        century: Some(century),
        gender: Some(Gender::from_digit(digit(12))),
        governorate: governorate_from_code(&national_id[7..9]).map(str::to_string),
        is_valid: true,
    }
}
