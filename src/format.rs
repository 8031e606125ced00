//! Display Formatting
//!
//! Date and time rendering for the dashboard views: 12-hour clock times
//! ("2:30 PM") and long dates with ordinal day suffixes ("March 25th, 2024").

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Format a timestamp as a 12-hour clock time, e.g. "2:30 PM"
pub fn format_time(dt: &NaiveDateTime) -> String {
    let hour24 = dt.hour();
    let (hour, meridiem) = match hour24 {
        0 => (12, "AM"),
        1..=11 => (hour24, "AM"),
        12 => (12, "PM"),
        _ => (hour24 - 12, "PM"),
    };
    format!("{}:{:02} {}", hour, dt.minute(), meridiem)
}

/// Format a timestamp as a long date, e.g. "March 25th, 2024"
pub fn format_long_date(dt: &NaiveDateTime) -> String {
    format!(
        "{} {}{}, {}",
        dt.format("%B"),
        dt.day(),
        ordinal_suffix(dt.day()),
        dt.year()
    )
}

/// Ordinal suffix for a day of month (1st, 2nd, 3rd, 4th; 11th-13th are "th")
fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&at(2024, 3, 25, 14, 30)), "2:30 PM");
        assert_eq!(format_time(&at(2024, 3, 25, 16, 0)), "4:00 PM");
        assert_eq!(format_time(&at(2024, 3, 25, 0, 5)), "12:05 AM");
        assert_eq!(format_time(&at(2024, 3, 25, 12, 0)), "12:00 PM");
        assert_eq!(format_time(&at(2024, 3, 25, 9, 15)), "9:15 AM");
        assert_eq!(format_time(&at(2024, 3, 25, 23, 59)), "11:59 PM");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(&at(2024, 3, 25, 0, 0)), "March 25th, 2024");
        assert_eq!(format_long_date(&at(2024, 3, 1, 0, 0)), "March 1st, 2024");
        assert_eq!(format_long_date(&at(2024, 1, 22, 0, 0)), "January 22nd, 2024");
        assert_eq!(format_long_date(&at(2024, 12, 3, 0, 0)), "December 3rd, 2024");
        assert_eq!(format_long_date(&at(2024, 6, 11, 0, 0)), "June 11th, 2024");
        assert_eq!(format_long_date(&at(2024, 6, 12, 0, 0)), "June 12th, 2024");
        assert_eq!(format_long_date(&at(2024, 6, 13, 0, 0)), "June 13th, 2024");
        assert_eq!(format_long_date(&at(2024, 6, 21, 0, 0)), "June 21st, 2024");
        assert_eq!(format_long_date(&at(2024, 6, 30, 0, 0)), "June 30th, 2024");
    }
}
