//! Utility functions for common operations.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an effective date in long form, e.g. "January 5, 2024".
///
/// Accepts a plain `YYYY-MM-DD` date, an RFC 3339 timestamp, or a timestamp
/// without zone as PostgREST sends for `timestamp` columns. The date part
/// is used as written, without converting time zones. Returns `None` for
/// empty or unparseable input so the caller can drop the line entirely.
pub fn format_effective_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
                .ok()
                .map(|dt| dt.date())
        })?;

    Some(date.format("%B %-d, %Y").to_string())
}

/// Truncate to `max_chars` characters, ending with "..." when shortened
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_effective_date("2024-01-05"), Some("January 5, 2024".to_string()));
        assert_eq!(format_effective_date("2023-12-31"), Some("December 31, 2023".to_string()));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_effective_date("2022-06-15T00:00:00+00:00"),
            Some("June 15, 2022".to_string())
        );
    }

    #[test]
    fn test_format_timestamp_without_zone() {
        assert_eq!(
            format_effective_date("2024-01-05T00:00:00"),
            Some("January 5, 2024".to_string())
        );
        assert_eq!(
            format_effective_date("2024-01-05T13:45:10.123456"),
            Some("January 5, 2024".to_string())
        );
        assert_eq!(
            format_effective_date("2024-01-05 08:00:00"),
            Some("January 5, 2024".to_string())
        );
    }

    #[test]
    fn test_format_rejects_empty_and_garbage() {
        assert_eq!(format_effective_date(""), None);
        assert_eq!(format_effective_date("   "), None);
        assert_eq!(format_effective_date("soon"), None);
        assert_eq!(format_effective_date("2024-13-45"), None);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_chars("this is too long", 10), "this is...");
        assert_eq!(truncate_chars("abcdef", 2), "ab");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("Scale-up • Tech • Transfer", 12), "Scale-up ...");
    }
}
