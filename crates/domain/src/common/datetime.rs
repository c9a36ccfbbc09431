//! Date formatting and parsing used by the prompt, the form, and the printed page.

use chrono::{Datelike, NaiveDate};

/// Parses a `YYYY-MM-DD` form value.
///
/// # Examples
///
/// ```
/// use newsdesk_domain::common::parse_form_date;
/// use chrono::Datelike;
///
/// let date = parse_form_date("2026-10-16").unwrap();
/// assert_eq!(date.month(), 10);
/// ```
pub fn parse_form_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
}

/// Formats a date as a form value, `YYYY-MM-DD`.
pub fn format_form_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// US short date without zero padding, e.g. `10/6/2026`.
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Masthead date, e.g. `Friday, October 16, 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}

/// Byline date, e.g. `Oct 16, 2026`.
pub fn format_byline_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_form_date() {
        assert_eq!(parse_form_date(" 2026-03-05 ").unwrap(), date(2026, 3, 5));
        assert!(parse_form_date("05/03/2026").is_err());
        assert!(parse_form_date("").is_err());
    }

    #[test]
    fn test_formats() {
        let d = date(2026, 3, 5);
        assert_eq!(format_form_date(d), "2026-03-05");
        assert_eq!(format_short_date(d), "3/5/2026");
        assert_eq!(format_long_date(d), "Thursday, March 05, 2026");
        assert_eq!(format_byline_date(d), "Mar 05, 2026");
    }
}
