use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::age;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Century {
    #[serde(rename = "1800-1899")]
    Nineteenth,
    #[serde(rename = "1900-1999")]
    Twentieth,
    #[serde(rename = "2000-2099")]
    TwentyFirst,
}

impl Century {
    /// Century marker is the first digit of the national ID
    pub fn from_digit(digit: u32) -> Option<Self> {
        match digit {
            1 => Some(Century::Nineteenth),
            2 => Some(Century::Twentieth),
            3 => Some(Century::TwentyFirst),
            _ => None,
        }
    }

    pub fn base_year(&self) -> i32 {
        match self {
            Century::Nineteenth => 1800,
            Century::Twentieth => 1900,
            Century::TwentyFirst => 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Odd sex digit is male, even is female
    pub fn from_digit(digit: u32) -> Self {
        if digit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

/// Demographic fields recovered from a national ID.
///
/// When `is_valid` is false every other field is `None`. A valid decode may
/// still carry `governorate: None` when the birthplace code is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedEgyptianId {
    pub national_id: Option<String>,
    pub birth_date: Option<String>,
    pub century: Option<Century>,
    pub gender: Option<Gender>,
    pub governorate: Option<String>,
    pub is_valid: bool,
}

impl DecodedEgyptianId {
    pub fn invalid() -> Self {
        DecodedEgyptianId {
            national_id: None,
            birth_date: None,
            century: None,
            gender: None,
            governorate: None,
            is_valid: false,
        }
    }

    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }

    /// Age details relative to `today`; `None` unless the decode is valid.
    pub fn age_profile(&self, today: NaiveDate, elderly_threshold: u32) -> Option<AgeProfile> {
        if !self.is_valid {
            return None;
        }
        let birth = self.parsed_birth_date()?;
        let years = age::calculate_age(birth, today);
        Some(AgeProfile {
            age: years,
            age_group: age::age_group(years).to_string(),
            is_elderly: age::is_elderly(birth, today, elderly_threshold),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeProfile {
    pub age: u32,
    pub age_group: String,
    pub is_elderly: bool,
}

/// One OCR pass over one image variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedText {
    pub text: String,
    pub confidence: f32,
}

impl RecognizedText {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        RecognizedText {
            text: text.into(),
            confidence,
        }
    }
}

/// Fields read off an ID card.
///
/// `full_name` and `address` come from line heuristics and are not
/// authoritative; they can be wrong or missing on poor scans. A `None`
/// `national_id` means the operator should be asked to type it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResult {
    pub national_id: Option<String>,
    pub full_name: Option<String>,
    pub address: Option<String>,
    /// Leading slice of the raw OCR text, for diagnostics
    pub text: String,
    pub decoded_info: Option<DecodedEgyptianId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_decode() -> DecodedEgyptianId {
        DecodedEgyptianId {
            national_id: Some("29005090100123".to_string()),
            birth_date: Some("1990-05-09".to_string()),
            century: Some(Century::Twentieth),
            gender: Some(Gender::Female),
            governorate: Some("القاهرة".to_string()),
            is_valid: true,
        }
    }

    #[test]
    fn test_decoded_id_serializes_camel_case() {
        let json = serde_json::to_value(valid_decode()).unwrap();
        assert_eq!(json["nationalId"], "29005090100123");
        assert_eq!(json["birthDate"], "1990-05-09");
        assert_eq!(json["century"], "1900-1999");
        assert_eq!(json["gender"], "female");
        assert_eq!(json["isValid"], true);
    }

    #[test]
    fn test_invalid_decode_serializes_nulls() {
        let json = serde_json::to_value(DecodedEgyptianId::invalid()).unwrap();
        assert!(json["nationalId"].is_null());
        assert!(json["century"].is_null());
        assert_eq!(json["isValid"], false);
    }

    #[test]
    fn test_age_profile() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
        let profile = valid_decode().age_profile(today, 60).unwrap();
        assert_eq!(profile.age, 33);
        assert_eq!(profile.age_group, "30-39");
        assert!(!profile.is_elderly);
    }

    #[test]
    fn test_age_profile_requires_valid_decode() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
        assert!(DecodedEgyptianId::invalid().age_profile(today, 60).is_none());
    }

    #[test]
    fn test_gender_parity() {
        assert_eq!(Gender::from_digit(7), Gender::Male);
        assert_eq!(Gender::from_digit(8), Gender::Female);
        assert_eq!(Gender::from_digit(0), Gender::Female);
    }
}
