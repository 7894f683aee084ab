const ARABIC_INDIC_ZERO: u32 = 0x0660;
const ARABIC_INDIC_NINE: u32 = 0x0669;

/// Replace Arabic-Indic digits (٠-٩) with ASCII digits; everything else is kept.
pub fn normalize_digits(text: &str) -> String {
    text.chars().map(normalize_char).collect()
}

fn normalize_char(c: char) -> char {
    let code = c as u32;
    if (ARABIC_INDIC_ZERO..=ARABIC_INDIC_NINE).contains(&code) {
        char::from(b'0' + (code - ARABIC_INDIC_ZERO) as u8)
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_indic_digits() {
        assert_eq!(normalize_digits("١٢٣ أحمد"), "123 أحمد");
        assert_eq!(normalize_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    }

    #[test]
    fn test_other_characters_unchanged() {
        let text = "بطاقة رقم 29005091234567\nمحافظة: القاهرة - ABC";
        assert_eq!(normalize_digits(text), text);
    }

    #[test]
    fn test_mixed_digits_and_idempotence() {
        let once = normalize_digits("٢٩٠05-٠٩\n١٢٣");
        assert_eq!(once, "29005-09\n123");
        assert_eq!(normalize_digits(&once), once);
    }

    #[test]
    fn test_extended_arabic_digits_are_not_touched() {
        // Persian digits live in a different block
        assert_eq!(normalize_digits("۱۲۳"), "۱۲۳");
    }
}
