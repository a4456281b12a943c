use chrono::{Datelike, NaiveDate};

use crate::error::{ReminderError, Result};

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// True when `a` falls on a strictly later calendar day than `b`.
pub fn is_after(a: NaiveDate, b: NaiveDate) -> bool {
    (a.year(), a.month(), a.day()) > (b.year(), b.month(), b.day())
}

/// Parse `M-D-YYYY`. Month and day take one or two digits, the year exactly four.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let invalid = || ReminderError::invalid(format!("{} is not a date in M-D-YYYY form", s));

    let mut parts = s.split('-');
    let (Some(m), Some(d), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let month = parse_field(m, 1, 2).ok_or_else(invalid)?;
    let day = parse_field(d, 1, 2).ok_or_else(invalid)?;
    let year = parse_field(y, 4, 4).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{}-{}-{:04}", date.month(), date.day(), date.year())
}

fn parse_field(s: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if s.len() < min_len || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_reflexive() {
        for d in [date(2024, 1, 10), date(1999, 12, 31), date(2024, 2, 29)] {
            assert!(is_same_day(d, d));
        }
        assert!(!is_same_day(date(2024, 1, 10), date(2024, 1, 11)));
        assert!(!is_same_day(date(2024, 1, 10), date(2025, 1, 10)));
    }

    #[test]
    fn test_is_after_orders_year_then_month_then_day() {
        assert!(is_after(date(2025, 1, 1), date(2024, 12, 31)));
        assert!(is_after(date(2024, 3, 1), date(2024, 2, 29)));
        assert!(is_after(date(2024, 3, 2), date(2024, 3, 1)));
        assert!(!is_after(date(2024, 3, 1), date(2024, 3, 1)));
        assert!(!is_after(date(2023, 12, 31), date(2024, 1, 1)));
    }

    #[test]
    fn test_is_after_is_never_symmetric() {
        let days = [date(2024, 1, 10), date(2024, 1, 11), date(2023, 6, 5), date(2024, 1, 10)];
        for a in days {
            for b in days {
                assert!(!(is_after(a, b) && is_after(b, a)));
            }
        }
    }

    #[test]
    fn test_parse_date_accepts_unpadded_and_padded() {
        assert_eq!(parse_date("3-9-2025").unwrap(), date(2025, 3, 9));
        assert_eq!(parse_date("03-09-2025").unwrap(), date(2025, 3, 9));
        assert_eq!(parse_date("12-31-1999").unwrap(), date(1999, 12, 31));
    }

    #[test]
    fn test_parse_date_rejects_bad_input() {
        for bad in [
            "13-40-2024",
            "2-30-2024",
            "0-1-2024",
            "1-1-24",
            "1-1-02024",
            "001-1-2024",
            "1/1/2024",
            "1-1-2024-1",
            " 1-1-2024",
            "a-b-cdef",
            "",
        ] {
            assert!(parse_date(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_format_date_has_no_padding() {
        assert_eq!(format_date(date(2025, 3, 9)), "3-9-2025");
        assert_eq!(format_date(date(2024, 11, 28)), "11-28-2024");
        assert_eq!(parse_date(&format_date(date(2024, 2, 29))).unwrap(), date(2024, 2, 29));
    }
}
