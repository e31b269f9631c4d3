use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::DayContext;

/// Derive the situational flags for a date.
///
/// Pure calendar arithmetic with fixed month/day-range rules; valid for any
/// calendar date. The exam and end-semester windows coincide in May and
/// November, so both flags are set together then.
pub fn classify(date: NaiveDate) -> DayContext {
    let month = date.month();
    let day = date.day();
    let weekday = date.weekday();

    let is_exam = (month == 5 && day > 15) || (month == 11 && day > 15) || (month == 12 && day < 20);

    let is_festival = (month == 8 && (13..=17).contains(&day))
        || (month == 10 && (20..=26).contains(&day))
        || (month == 3 && (6..=10).contains(&day))
        || (month == 1 && day == 26);

    let is_start_semester = (month == 1 || month == 8) && day <= 14;
    let is_end_semester = (month == 5 && day > 15) || (month == 11 && day > 15);
    let is_weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);
    let is_monsoon = (6..=9).contains(&month);

    DayContext {
        weekday,
        month,
        day,
        week_of_year: date.iso_week().week(),
        is_exam,
        is_festival,
        is_weekend,
        is_start_semester,
        is_end_semester,
        is_monsoon,
    }
}

/// Full weekday name as it appears in the output schema.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exam_and_end_semester_overlap() {
        let ctx = classify(date(2024, 5, 20));
        assert!(ctx.is_exam);
        assert!(ctx.is_end_semester);

        let ctx = classify(date(2024, 11, 16));
        assert!(ctx.is_exam);
        assert!(ctx.is_end_semester);
    }

    #[test]
    fn test_december_exams_without_end_semester() {
        let ctx = classify(date(2024, 12, 10));
        assert!(ctx.is_exam);
        assert!(!ctx.is_end_semester);

        // December 20 onwards is past the exam window
        assert!(!classify(date(2024, 12, 20)).is_exam);
    }

    #[test]
    fn test_festival_windows() {
        assert!(classify(date(2024, 8, 15)).is_festival);
        assert!(classify(date(2024, 10, 23)).is_festival);
        assert!(classify(date(2024, 3, 8)).is_festival);
        assert!(classify(date(2024, 1, 26)).is_festival);

        assert!(!classify(date(2024, 8, 12)).is_festival);
        assert!(!classify(date(2024, 10, 27)).is_festival);
        assert!(!classify(date(2024, 1, 25)).is_festival);
    }

    #[test]
    fn test_semester_boundaries() {
        assert!(classify(date(2024, 1, 14)).is_start_semester);
        assert!(!classify(date(2024, 1, 15)).is_start_semester);
        assert!(classify(date(2024, 8, 1)).is_start_semester);
        assert!(!classify(date(2024, 7, 1)).is_start_semester);
    }

    #[test]
    fn test_weekend_and_monsoon() {
        // 2024-01-06 is a Saturday
        let ctx = classify(date(2024, 1, 6));
        assert!(ctx.is_weekend);
        assert!(!ctx.is_monsoon);

        let ctx = classify(date(2024, 7, 1));
        assert!(ctx.is_monsoon);

        assert!(!classify(date(2024, 5, 1)).is_monsoon);
        assert!(!classify(date(2024, 10, 1)).is_monsoon);
    }

    #[test]
    fn test_context_fields() {
        // 2024-01-01 is a Monday in ISO week 1
        let ctx = classify(date(2024, 1, 1));
        assert_eq!(ctx.weekday, Weekday::Mon);
        assert_eq!(ctx.month, 1);
        assert_eq!(ctx.day, 1);
        assert_eq!(ctx.week_of_year, 1);
        assert!(ctx.is_start_semester);
        assert!(!ctx.is_weekend);
        assert!(!ctx.is_exam);
        assert!(!ctx.is_festival);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }
}
