use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::processing::candidates::{strip_non_digits, NATIONAL_ID_LENGTH};

lazy_static! {
    static ref FREE_STANDING_ID: Regex = Regex::new(r"(?:^|[^0-9])([0-9]{14})(?:[^0-9]|$)").unwrap();
    static ref SEPARATED_DIGITS: Regex = Regex::new(r"[0-9\s.-]{17,30}").unwrap();
}

/// Checks the date and century fields embedded in a 14-digit candidate.
/// There is no month-length or leap-year cross-check: day 31 in February
/// passes, since OCR noise rarely lands exactly on such a combination.
pub fn is_structurally_valid(candidate: &str) -> bool {
    if candidate.len() != NATIONAL_ID_LENGTH || !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let field = |start: usize, end: usize| candidate[start..end].parse::<u32>().ok();

    let century_ok = matches!(candidate.as_bytes()[0], b'1' | b'2' | b'3');
    let year_ok = field(1, 3).map_or(false, |y| y <= 99);
    let month_ok = field(3, 5).map_or(false, |m| (1..=12).contains(&m));
    let day_ok = field(5, 7).map_or(false, |d| (1..=31).contains(&d));

    century_ok && year_ok && month_ok && day_ok
}

/// Pick the national ID out of ordered candidates, falling back to looser
/// scans of the normalized text. `None` is an ordinary outcome for cards
/// with no legible number.
pub fn select_national_id(candidates: &[String], normalized: &str) -> Option<String> {
    if let Some(found) = candidates.iter().find(|c| is_structurally_valid(c)) {
        debug!("Selected structurally valid candidate {}", found);
        return Some(found.clone());
    }

    if let Some(token) = free_standing_token(normalized) {
        debug!("No valid candidate, falling back to free-standing token {}", token);
        return Some(token);
    }

    if let Some(digits) = separated_digits(normalized) {
        debug!("No valid candidate, falling back to separated digits {}", digits);
        return Some(digits);
    }

    debug!("No national ID found among {} candidates", candidates.len());
    None
}

fn free_standing_token(normalized: &str) -> Option<String> {
    FREE_STANDING_ID
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn separated_digits(normalized: &str) -> Option<String> {
    SEPARATED_DIGITS.find_iter(normalized).find_map(|m| {
        let cleaned = strip_non_digits(m.as_str());
        if cleaned.len() >= NATIONAL_ID_LENGTH {
            Some(cleaned[..NATIONAL_ID_LENGTH].to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::candidates::extract_candidates;

    fn pipeline(text: &str) -> Option<String> {
        select_national_id(&extract_candidates(text), text)
    }

    #[test]
    fn test_structural_checks() {
        assert!(is_structurally_valid("29005091234567"));
        assert!(is_structurally_valid("10012310000000"));
        assert!(is_structurally_valid("30102310000000"));
        // century digit
        assert!(!is_structurally_valid("49005091234567"));
        assert!(!is_structurally_valid("09005091234567"));
        // month
        assert!(!is_structurally_valid("29013091234567"));
        assert!(!is_structurally_valid("29000091234567"));
        // day
        assert!(!is_structurally_valid("29005321234567"));
        assert!(!is_structurally_valid("29005001234567"));
        // shape
        assert!(!is_structurally_valid("2900509123456"));
        assert!(!is_structurally_valid("2900509123456a"));
    }

    #[test]
    fn test_day_not_checked_against_month() {
        assert!(is_structurally_valid("29002311234567"));
    }

    #[test]
    fn test_clean_id_in_text() {
        assert_eq!(
            pipeline("رقم البطاقة 29005091234567 صادرة").as_deref(),
            Some("29005091234567")
        );
    }

    #[test]
    fn test_prepended_garbage_digit_is_skipped() {
        // offset 0 starts with 9, offset 1 is the real ID
        assert_eq!(pipeline("929005091234567").as_deref(), Some("29005091234567"));
    }

    #[test]
    fn test_first_valid_candidate_wins() {
        let candidates = vec![
            "99999999999999".to_string(),
            "30101011234567".to_string(),
            "29005091234567".to_string(),
        ];
        assert_eq!(
            select_national_id(&candidates, "").as_deref(),
            Some("30101011234567")
        );
    }

    #[test]
    fn test_stray_space_recovered() {
        assert_eq!(pipeline("الرقم 2900509 1234567").as_deref(), Some("29005091234567"));
    }

    #[test]
    fn test_free_standing_fallback_returns_invalid_token() {
        // no structurally valid window, but a bare 14-digit token exists
        assert_eq!(pipeline("رقم 99999999999999 صادرة").as_deref(), Some("99999999999999"));
    }

    #[test]
    fn test_separated_digits_fallback() {
        let text = "99999 99999 99999 99";
        assert_eq!(
            select_national_id(&[], text).as_deref(),
            Some("99999999999999")
        );
    }

    #[test]
    fn test_absence_is_none() {
        assert_eq!(pipeline("جمهورية مصر العربية\nبطاقة تحقيق الشخصية"), None);
        assert_eq!(pipeline("تاريخ 12/05/2020"), None);
        assert_eq!(pipeline(""), None);
    }
}
