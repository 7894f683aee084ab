// Line heuristics for the free-text fields on the front of an ID card.
//
// Results are best guesses, not authoritative: a noisy scan can yield the
// wrong line or nothing at all, and callers should let an operator confirm.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::ops::RangeInclusive;

use crate::models::governorates::governorate_place_names;

pub const NAME_WORD_COUNT: RangeInclusive<usize> = 2..=7;
pub const MIN_NAME_LENGTH: usize = 6;
/// Most full names on the card are "given father grandfather [family]"
pub const IDEAL_NAME_WORD_COUNT: RangeInclusive<usize> = 3..=4;
pub const NAME_BASE_SCORE: i32 = 10;
pub const NAME_WORD_DISTANCE_PENALTY: i32 = 2;
pub const NAME_LENGTH_BONUS_RANGE: RangeInclusive<usize> = 10..=50;
pub const NAME_LENGTH_BONUS: i32 = 3;
pub const ADDRESS_LENGTH: RangeInclusive<usize> = 4..=100;

/// Card boilerplate that never belongs to a holder's name
pub const EXCLUDED_WORDS: [&str; 22] = [
    "جمهورية",
    "مصر",
    "العربية",
    "بطاقة",
    "تحقيق",
    "الشخصية",
    "الرقم",
    "رقم",
    "القومي",
    "قومي",
    "محافظة",
    "وزارة",
    "الداخلية",
    "مصلحة",
    "الأحوال",
    "المدنية",
    "تاريخ",
    "الميلاد",
    "الإصدار",
    "العنوان",
    "الاسم",
    "الوظيفة",
];

lazy_static! {
    static ref ADDRESS_LABELS: Regex =
        Regex::new(r"(?i)\b(?:address|governorate)\b|العنوان|محافظ[ةه]|:").unwrap();
    static ref FOLDED_EXCLUDED_WORDS: Vec<String> =
        EXCLUDED_WORDS.iter().map(|w| fold_arabic(w)).collect();
    static ref FOLDED_GOVERNORATES: Vec<String> = governorate_place_names()
        .map(|name| arabic_words(name).join(" "))
        .collect();
}

pub fn is_arabic_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

fn is_arabic_letter(c: char) -> bool {
    is_arabic_char(c) && c.is_alphabetic()
}

/// Collapse spelling variants OCR produces for the same word:
/// hamza-carrying alefs to bare alef, alef maqsura to yaa, taa marbuta to haa.
pub fn fold_arabic(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'أ' | 'إ' | 'آ' => 'ا',
            'ى' => 'ي',
            'ة' => 'ه',
            other => other,
        })
        .collect()
}

/// Folded Arabic words of a line; every other character acts as a separator
fn arabic_words(line: &str) -> Vec<String> {
    fold_arabic(line)
        .split(|c: char| !is_arabic_letter(c))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Substring match over folded words, so attached prefixes such as
/// بالجيزة or والقاهرة still count.
fn contains_governorate(words: &[String]) -> bool {
    let joined = words.join(" ");
    FOLDED_GOVERNORATES
        .iter()
        .any(|gov| !gov.is_empty() && joined.contains(gov.as_str()))
}

fn contains_excluded_word(words: &[String]) -> bool {
    words.iter().any(|w| FOLDED_EXCLUDED_WORDS.contains(w))
}

pub fn name_score(word_count: usize, length: usize) -> i32 {
    let distance = if word_count < *IDEAL_NAME_WORD_COUNT.start() {
        IDEAL_NAME_WORD_COUNT.start() - word_count
    } else if word_count > *IDEAL_NAME_WORD_COUNT.end() {
        word_count - IDEAL_NAME_WORD_COUNT.end()
    } else {
        0
    };

    let mut score = NAME_BASE_SCORE - distance as i32 * NAME_WORD_DISTANCE_PENALTY;
    if NAME_LENGTH_BONUS_RANGE.contains(&length) {
        score += NAME_LENGTH_BONUS;
    }
    score
}

/// Best-scoring line that looks like a personal name. Ties keep the earlier line.
pub fn extract_full_name(lines: &[&str]) -> Option<String> {
    let mut best: Option<(i32, String)> = None;

    for line in lines {
        if !line.chars().any(is_arabic_char) || line.chars().any(|c| c.is_numeric()) {
            continue;
        }

        let words: Vec<String> = line
            .split(|c: char| !is_arabic_letter(c))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        let candidate = words.join(" ");
        let length = candidate.chars().count();
        if !NAME_WORD_COUNT.contains(&words.len()) || length < MIN_NAME_LENGTH {
            continue;
        }

        let folded: Vec<String> = words.iter().map(|w| fold_arabic(w)).collect();
        if contains_excluded_word(&folded) || contains_governorate(&folded) {
            continue;
        }

        let score = name_score(words.len(), length);
        debug!("Name candidate '{}' scored {}", candidate, score);
        if best.as_ref().map_or(true, |(top, _)| score > *top) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, name)| name)
}

/// First line that names a governorate and still has content once the
/// address/governorate labels are removed.
pub fn extract_address(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        let trimmed = line.trim();
        if !contains_governorate(&arabic_words(trimmed)) {
            return None;
        }
        let residual = ADDRESS_LABELS.replace_all(trimmed, "");
        let length = residual.trim().chars().count();
        if ADDRESS_LENGTH.contains(&length) {
            Some(trimmed.to_string())
        } else {
            debug!("Address candidate '{}' rejected, residual length {}", trimmed, length);
            None
        }
    })
}
