/// Utilities for date formatting
///
/// Journal posts carry RFC 3339 timestamps or bare dates; both render as
/// "March 15, 2024".
use chrono::{DateTime, NaiveDate};

/// Long English date for an ISO timestamp or date.
/// Example: "2024-03-15T14:02:26.123Z" -> "March 15, 2024"
///
/// Returns `None` for blank or unparsable input so callers can omit the line.
pub fn format_long_date(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let date = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%B %-d, %Y").to_string())
}
