use chrono::{Datelike, NaiveDate};

/// Whole years between `birth` and `today`; zero for birth dates in the future.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

pub fn is_elderly(birth: NaiveDate, today: NaiveDate, threshold: u32) -> bool {
    calculate_age(birth, today) >= threshold
}

/// Reporting bucket used on voter dashboards
pub fn age_group(age: u32) -> &'static str {
    match age {
        0..=17 => "أقل من 18",
        18..=29 => "18-29",
        30..=39 => "30-39",
        40..=49 => "40-49",
        50..=59 => "50-59",
        60..=69 => "60-69",
        70..=79 => "70-79",
        _ => "80+",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date(1990, 5, 9);
        assert_eq!(calculate_age(birth, date(2024, 5, 8)), 33);
        assert_eq!(calculate_age(birth, date(2024, 5, 9)), 34);
        assert_eq!(calculate_age(birth, date(2024, 12, 1)), 34);
    }

    #[test]
    fn test_future_birth_date_is_zero() {
        assert_eq!(calculate_age(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_elderly_threshold() {
        let today = date(2024, 6, 1);
        assert!(is_elderly(date(1964, 6, 1), today, 60));
        assert!(!is_elderly(date(1964, 6, 2), today, 60));
        assert!(is_elderly(date(1970, 1, 1), today, 50));
    }

    #[test]
    fn test_age_groups() {
        assert_eq!(age_group(0), "أقل من 18");
        assert_eq!(age_group(17), "أقل من 18");
        assert_eq!(age_group(18), "18-29");
        assert_eq!(age_group(45), "40-49");
        assert_eq!(age_group(79), "70-79");
        assert_eq!(age_group(80), "80+");
        assert_eq!(age_group(103), "80+");
    }
}
