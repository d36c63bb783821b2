//! Calendar date formats used in order files
//!
//! Dates render as `MM-dd-yyyy` inside rows; bucket file names use the same
//! digits without separators (`Orders_MMddyyyy.txt`).

use chrono::NaiveDate;

/// Row format for creation and delivery dates
pub const DATE_FORMAT: &str = "%m-%d-%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a row date (`MM-dd-yyyy` only)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parse a date typed by a user: row format or ISO `yyyy-MM-dd`
pub fn parse_user_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    parse_date(value).or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}
