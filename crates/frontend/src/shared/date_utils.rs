//! Utilities for date and time formatting
//!
//! API timestamps are RFC 3339 (`2024-03-15T14:02:26.123Z`); calendar dates
//! are `YYYY-MM-DD`, optionally with a time part.

use chrono::{DateTime, NaiveDate, Utc};

fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "Mar 15, 2024"; unparseable
/// input is returned unchanged
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// "2024-03-15T14:02:26.123Z" -> "Mar 15, 2024 14:02:26"
pub fn format_datetime(value: &str) -> String {
    match parse_datetime(value) {
        Some(dt) => dt.format("%b %-d, %Y %H:%M:%S").to_string(),
        None => value.to_string(),
    }
}

/// Относительное время ("5 minutes ago", "in 2 days") относительно `now`
pub fn format_relative(value: &str, now: DateTime<Utc>) -> Option<String> {
    let dt = parse_datetime(value)?;
    let seconds = (now - dt).num_seconds();
    let (amount, future) = (seconds.unsigned_abs(), seconds < 0);

    let (count, unit) = match amount {
        0..=44 => return Some("just now".to_string()),
        45..=3_599 => ((amount + 30) / 60, "minute"),
        3_600..=86_399 => ((amount + 1_800) / 3_600, "hour"),
        86_400..=2_591_999 => ((amount + 43_200) / 86_400, "day"),
        2_592_000..=31_535_999 => ((amount + 1_296_000) / 2_592_000, "month"),
        _ => ((amount + 15_768_000) / 31_536_000, "year"),
    };
    let count = count.max(1);
    let plural = if count == 1 { "" } else { "s" };

    Some(if future {
        format!("in {} {}{}", count, unit, plural)
    } else {
        format!("{} {}{} ago", count, unit, plural)
    })
}
