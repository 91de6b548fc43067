use chrono::{Datelike, Local, Months, NaiveDate, NaiveDateTime};

use crate::errors::{Error, Result};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar day used as "today" by use cases.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `YYYY-MM-DD` string, naming the offending field on failure.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        Error::invalid_input(format!(
            "{field} must be a YYYY-MM-DD date, got '{value}': {e}"
        ))
    })
}

pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_date(field, v).map(Some),
        None => Ok(None),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Renders a UTC timestamp as RFC 3339.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.and_utc().to_rfc3339()
}

pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(chrono::Days::new(days))
        .ok_or_else(|| Error::invalid_input(format!("date {date} + {days} days is out of range")))
}

/// Calendar month arithmetic. The day is clamped to the end of the target
/// month, so Jan 31 + 1 month is the last day of February.
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months)).ok_or_else(|| {
        Error::invalid_input(format!("date {date} + {months} months is out of range"))
    })
}

pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate> {
    add_months(date, years.saturating_mul(12))
}

/// Monday through Sunday of the week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = day.week(chrono::Weekday::Mon);
    (week.first_day(), week.last_day())
}

/// First and last calendar day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_day(1).unwrap_or(day);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);
    (first, last)
}

/// January 1st through December 31st of the year containing `day`.
pub fn year_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_ordinal(1).unwrap_or(day);
    let last = NaiveDate::from_ymd_opt(day.year(), 12, 31).unwrap_or(day);
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_and_format_date() {
        let date = parse_date("date", "2024-03-05").unwrap();
        assert_eq!(date, d(2024, 3, 5));
        assert_eq!(format_date(date), "2024-03-05");
        assert!(parse_date("date", "05/03/2024").is_err());
        assert!(parse_date("date", "2024-02-30").is_err());
    }

    #[test]
    fn test_parse_optional_date_treats_blank_as_none() {
        assert_eq!(parse_optional_date("start", None).unwrap(), None);
        assert_eq!(parse_optional_date("start", Some("  ")).unwrap(), None);
        assert_eq!(
            parse_optional_date("start", Some("2024-01-01")).unwrap(),
            Some(d(2024, 1, 1))
        );
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(d(2024, 1, 1), 1).unwrap(), d(2024, 2, 1));
        assert_eq!(add_months(d(2024, 1, 31), 1).unwrap(), d(2024, 2, 29));
        assert_eq!(add_months(d(2023, 12, 15), 1).unwrap(), d(2024, 1, 15));
        assert_eq!(add_years(d(2024, 2, 29), 1).unwrap(), d(2025, 2, 28));
    }

    #[test]
    fn test_week_bounds_monday_to_sunday() {
        // 2024-05-15 is a Wednesday
        assert_eq!(week_bounds(d(2024, 5, 15)), (d(2024, 5, 13), d(2024, 5, 19)));
        // Sunday belongs to the week that started the previous Monday
        assert_eq!(week_bounds(d(2024, 5, 19)), (d(2024, 5, 13), d(2024, 5, 19)));
        assert_eq!(week_bounds(d(2024, 5, 13)), (d(2024, 5, 13), d(2024, 5, 19)));
    }

    #[test]
    fn test_month_and_year_bounds() {
        assert_eq!(month_bounds(d(2024, 2, 10)), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(month_bounds(d(2023, 12, 31)), (d(2023, 12, 1), d(2023, 12, 31)));
        assert_eq!(year_bounds(d(2024, 7, 4)), (d(2024, 1, 1), d(2024, 12, 31)));
    }
}
