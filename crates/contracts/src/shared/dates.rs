//! Date helpers for report filters
//!
//! All dates travel as `YYYY-MM-DD` strings.

use anyhow::Context;
use chrono::{Datelike, Duration, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as `YYYY-MM-DD` (zero-padded month and day)
pub fn date_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", value))
}

pub fn first_day_of_month(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today - Duration::days(1)
}

/// Default report period: first day of the current month to yesterday.
/// On the 1st of a month the end falls into the previous month.
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (first_day_of_month(today), yesterday(today))
}

/// First and last day of a calendar month; `None` for an invalid month
pub fn month_range(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Whole month preceding the month of `date`
pub fn previous_month_range(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    if date.month() == 1 {
        month_range(date.year() - 1, 12)
    } else {
        month_range(date.year(), date.month() - 1)
    }
}

/// Drop the time-of-day part of an ISO timestamp ("2024-03-15T10:00:00Z" -> "2024-03-15").
/// Values without a `T` separator are returned unchanged.
pub fn date_only(value: &str) -> &str {
    match value.find('T') {
        Some(pos) => &value[..pos],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_string_zero_pads() {
        assert_eq!(date_string(ymd(2025, 1, 9)), "2025-01-09");
        assert_eq!(date_string(ymd(2025, 5, 5)), "2025-05-05");
        assert_eq!(date_string(ymd(2025, 12, 31)), "2025-12-31");
    }

    #[test]
    fn test_default_range_mid_month() {
        let (start, end) = default_range(ymd(2024, 3, 15));
        assert_eq!(date_string(start), "2024-03-01");
        assert_eq!(date_string(end), "2024-03-14");
    }

    #[test]
    fn test_default_range_first_of_month_crosses_back() {
        let (start, end) = default_range(ymd(2024, 3, 1));
        assert_eq!(start, ymd(2024, 3, 1));
        assert_eq!(end, ymd(2024, 2, 29));
        assert!(start > end);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2023-01-31").unwrap(), ymd(2023, 1, 31));
        assert!(parse_date("31.01.2023").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_month_range() {
        assert_eq!(month_range(2024, 2), Some((ymd(2024, 2, 1), ymd(2024, 2, 29))));
        assert_eq!(month_range(2023, 12), Some((ymd(2023, 12, 1), ymd(2023, 12, 31))));
        assert_eq!(month_range(2023, 13), None);
    }

    #[test]
    fn test_previous_month_range_wraps_year() {
        assert_eq!(
            previous_month_range(ymd(2024, 1, 20)),
            Some((ymd(2023, 12, 1), ymd(2023, 12, 31)))
        );
        assert_eq!(
            previous_month_range(ymd(2024, 3, 1)),
            Some((ymd(2024, 2, 1), ymd(2024, 2, 29)))
        );
    }

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(date_only("2024-03-15"), "2024-03-15");
        assert_eq!(date_only(""), "");
    }
}
