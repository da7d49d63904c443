use chrono::{Local, NaiveDate};

use crate::{Error, Result};

/// Date format used in the config file and the date editor
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` exam date
pub fn parse_exam_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| Error::InvalidDate {
        input: trimmed.to_string(),
        source,
    })
}

/// Whole days from the start of `today` until the exam, never negative
pub fn days_left(test: NaiveDate, today: NaiveDate) -> i64 {
    (test - today).num_days().max(0)
}

/// Human readable date, e.g. "April 20, 2025"
pub fn format_exam_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Exam date together with its display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pub date: NaiveDate,
    pub formatted: String,
    pub days_left: i64,
}

impl Countdown {
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            formatted: format_exam_date(date),
            days_left: days_left(date, today),
        }
    }

    pub fn parse(input: &str, today: NaiveDate) -> Result<Self> {
        parse_exam_date(input).map(|date| Self::new(date, today))
    }

    /// "1 day" / "12 days"
    pub fn days_label(&self) -> String {
        if self.days_left == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.days_left)
        }
    }

    /// Value written back to the config file
    pub fn to_config_value(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_exam_date() {
        assert_eq!(parse_exam_date("2025-04-20").unwrap(), date(2025, 4, 20));
        assert_eq!(parse_exam_date(" 2025-04-20 ").unwrap(), date(2025, 4, 20));
        assert!(matches!(
            parse_exam_date("20/04/2025"),
            Err(Error::InvalidDate { .. })
        ));
        assert!(parse_exam_date("2025-02-30").is_err());
    }

    #[test]
    fn test_days_left() {
        let today = date(2025, 4, 10);
        assert_eq!(days_left(date(2025, 4, 20), today), 10);
        assert_eq!(days_left(date(2025, 4, 11), today), 1);
        assert_eq!(days_left(today, today), 0);
    }

    #[test]
    fn test_days_left_never_negative() {
        assert_eq!(days_left(date(2025, 4, 20), date(2025, 5, 1)), 0);
    }

    #[test]
    fn test_days_left_across_year() {
        assert_eq!(days_left(date(2026, 1, 1), date(2025, 12, 31)), 1);
        assert_eq!(days_left(date(2024, 3, 1), date(2024, 2, 28)), 2);
    }

    #[test]
    fn test_format_exam_date() {
        assert_eq!(format_exam_date(date(2025, 4, 20)), "April 20, 2025");
        assert_eq!(format_exam_date(date(2025, 1, 5)), "January 5, 2025");
    }

    #[test]
    fn test_countdown() {
        let countdown = Countdown::parse("2025-04-20", date(2025, 4, 19)).unwrap();
        assert_eq!(countdown.days_left, 1);
        assert_eq!(countdown.days_label(), "1 day");
        assert_eq!(countdown.formatted, "April 20, 2025");
        assert_eq!(countdown.to_config_value(), "2025-04-20");

        let countdown = Countdown::new(date(2025, 4, 20), date(2025, 4, 1));
        assert_eq!(countdown.days_label(), "19 days");
    }
}
