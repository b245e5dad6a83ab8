//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application.
//! Backend timestamps arrive either as ISO strings (system entities)
//! or as `chrono::DateTime<Utc>` fields on document aggregates.

use chrono::{DateTime, Utc};

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2025-03-15T14:02:26.123Z" -> "15.03.2025 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                let time = time.trim_end_matches('Z');
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2025-03-15" or "2025-03-15T14:02:26Z" -> "15.03.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a document date to DD.MM.YYYY
pub fn format_date_utc(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Today's date as an `input type="date"` value ("YYYY-MM-DD")
pub fn today_input_value() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2025-03-15T14:02:26.123Z"),
            "15.03.2025 14:02:26"
        );
        assert_eq!(
            format_datetime("2025-12-31T23:59:59Z"),
            "31.12.2025 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-15"), "15.03.2025");
        assert_eq!(format_date("2025-03-15T14:02:26.123Z"), "15.03.2025");
    }

    #[test]
    fn test_format_date_utc() {
        let date = Utc.with_ymd_and_hms(2025, 7, 4, 10, 0, 0).unwrap();
        assert_eq!(format_date_utc(&date), "04.07.2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
