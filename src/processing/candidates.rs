// Candidate national-ID discovery over digit-normalized OCR text.
//
// Two views of the same text are scanned: plain digit runs, and runs where OCR
// has broken the number with spaces or punctuation. Every 14-digit window of a
// longer run is emitted, because a stray digit glued to either end of the real
// ID shifts it by one position.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

pub const NATIONAL_ID_LENGTH: usize = 14;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
    static ref PUNCTUATED_SEQUENCE: Regex = Regex::new(r"[0-9\s./-]{14,30}").unwrap();
}

/// Ordered candidates: strict digit-run windows first, then windows recovered
/// from punctuated sequences. Duplicates are not removed.
pub fn extract_candidates(normalized: &str) -> Vec<String> {
    let mut candidates = strict_run_candidates(normalized);
    let punctuated = punctuated_candidates(normalized);
    debug!(
        "ID candidates: {} from digit runs, {} from punctuated sequences",
        candidates.len(),
        punctuated.len()
    );
    candidates.extend(punctuated);
    candidates
}

pub fn strict_run_candidates(normalized: &str) -> Vec<String> {
    DIGIT_RUN
        .find_iter(normalized)
        .flat_map(|run| sliding_windows(run.as_str()))
        .collect()
}

pub fn punctuated_candidates(normalized: &str) -> Vec<String> {
    PUNCTUATED_SEQUENCE
        .find_iter(normalized)
        .flat_map(|m| sliding_windows(&strip_non_digits(m.as_str())))
        .collect()
}

pub fn strip_non_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Every length-14 window of an ASCII digit string, in offset order
fn sliding_windows(digits: &str) -> Vec<String> {
    if digits.len() < NATIONAL_ID_LENGTH {
        return Vec::new();
    }
    (0..=digits.len() - NATIONAL_ID_LENGTH)
        .map(|start| digits[start..start + NATIONAL_ID_LENGTH].to_string())
        .collect()
}
