// Birthplace codes (ID digits 8-9) as issued by the Civil Status Organization.
// Code 88 marks citizens born outside Egypt.

pub const GOVERNORATES: [(&str, &str); 28] = [
    ("01", "القاهرة"),
    ("02", "الإسكندرية"),
    ("03", "بورسعيد"),
    ("04", "السويس"),
    ("11", "دمياط"),
    ("12", "الدقهلية"),
    ("13", "الشرقية"),
    ("14", "القليوبية"),
    ("15", "كفر الشيخ"),
    ("16", "الغربية"),
    ("17", "المنوفية"),
    ("18", "البحيرة"),
    ("19", "الإسماعيلية"),
    ("21", "الجيزة"),
    ("22", "بني سويف"),
    ("23", "الفيوم"),
    ("24", "المنيا"),
    ("25", "أسيوط"),
    ("26", "سوهاج"),
    ("27", "قنا"),
    ("28", "أسوان"),
    ("29", "الأقصر"),
    ("31", "البحر الأحمر"),
    ("32", "الوادي الجديد"),
    ("33", "مطروح"),
    ("34", "شمال سيناء"),
    ("35", "جنوب سيناء"),
    ("88", "خارج مصر"),
];

pub const BORN_ABROAD_CODE: &str = "88";

pub fn governorate_from_code(code: &str) -> Option<&'static str> {
    GOVERNORATES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn all_governorates() -> Vec<&'static str> {
    GOVERNORATES.iter().map(|(_, name)| *name).collect()
}

/// Governorate names that can appear in an address line. The born-abroad
/// entry is a code label, not a place, so it is left out.
pub fn governorate_place_names() -> impl Iterator<Item = &'static str> {
    GOVERNORATES
        .iter()
        .filter(|(code, _)| *code != BORN_ABROAD_CODE)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(governorate_from_code("01"), Some("القاهرة"));
        assert_eq!(governorate_from_code("21"), Some("الجيزة"));
        assert_eq!(governorate_from_code("88"), Some("خارج مصر"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(governorate_from_code("99"), None);
        assert_eq!(governorate_from_code("05"), None);
        assert_eq!(governorate_from_code("1"), None);
    }

    #[test]
    fn test_all_governorates_in_table_order() {
        let names = all_governorates();
        assert_eq!(names.len(), 28);
        assert_eq!(names[0], "القاهرة");
        assert_eq!(names[27], "خارج مصر");
    }

    #[test]
    fn test_place_names_skip_born_abroad() {
        assert_eq!(governorate_place_names().count(), 27);
        assert!(!governorate_place_names().any(|n| n == "خارج مصر"));
    }
}
