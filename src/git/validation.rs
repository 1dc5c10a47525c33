use crate::error::{GltError, Result};
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Layout shared by the editor's pre-fill and its parser:
/// date, time, numeric UTC offset and a zone abbreviation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z %Z";

/// Parse a timestamp typed into the editor
///
/// Surrounding whitespace is ignored. The zone abbreviation is informational;
/// the numeric offset decides the timezone.
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();
    DateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|_| GltError::InvalidDate(text.to_string()))
}

/// Format a timestamp for editing (reversible with `parse_timestamp`)
#[must_use]
pub fn format_timestamp(dt: &DateTime<FixedOffset>) -> String {
    format!(
        "{} {}",
        dt.format("%Y-%m-%d %H:%M:%S %z"),
        zone_abbreviation(dt.offset())
    )
}

/// Abbreviation for a fixed offset: "UTC" for zero, the numeric offset otherwise
fn zone_abbreviation(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        return "UTC".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("{sign}{:02}{:02}", minutes / 60, minutes % 60)
}

/// Value stored when a timestamp could not be parsed (the Unix epoch, UTC)
#[must_use]
pub fn unset_timestamp() -> DateTime<FixedOffset> {
    DateTime::<Utc>::default().with_timezone(&Utc.fix())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_timestamp_utc() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let dt = utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 45).unwrap();

        assert_eq!(format_timestamp(&dt), "2024-01-15 14:30:45 +0000 UTC");
    }

    #[test]
    fn test_format_timestamp_positive_offset() {
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 1, 15, 14, 30, 45).unwrap();

        assert_eq!(format_timestamp(&dt), "2024-01-15 14:30:45 +0530 +0530");
    }

    #[test]
    fn test_format_timestamp_negative_offset() {
        let offset = FixedOffset::west_opt(8 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 1, 15, 14, 30, 45).unwrap();

        assert_eq!(format_timestamp(&dt), "2024-01-15 14:30:45 -0800 -0800");
    }

    #[test]
    fn test_parse_timestamp() {
        let dt = parse_timestamp("2024-01-15 14:30:00 +0000 UTC").unwrap();
        assert_eq!(dt.timestamp(), 1_705_329_000);
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn test_parse_timestamp_keeps_offset() {
        let dt = parse_timestamp("2024-01-15 14:30:00 +0530 IST").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 5 * 3600 + 30 * 60);

        let dt = parse_timestamp("2024-01-15 14:30:00 -0800 PST").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -8 * 3600);
    }

    #[test]
    fn test_parse_timestamp_whitespace_handling() {
        assert!(parse_timestamp("  2024-01-15 14:30:00 +0000 UTC  ").is_ok());
        assert!(parse_timestamp("\t2024-01-15 14:30:00 +0000 UTC\t").is_ok());
    }

    #[test]
    fn test_timestamp_roundtrip() {
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();

        let reparsed = parse_timestamp(&format_timestamp(&dt)).unwrap();
        assert_eq!(reparsed, dt);
        assert_eq!(reparsed.offset(), dt.offset());
    }

    #[test]
    fn test_parse_timestamp_invalid_formats() {
        assert!(parse_timestamp("invalid").is_err());
        assert!(parse_timestamp("").is_err());
        // Wrong separators
        assert!(parse_timestamp("2024/01/15 14:30:00 +0000 UTC").is_err());
        // Wrong order
        assert!(parse_timestamp("15-01-2024 14:30:00 +0000 UTC").is_err());
        // Missing offset
        assert!(parse_timestamp("2024-01-15 14:30:00").is_err());
        assert!(parse_timestamp("2024-01-15").is_err());
    }

    #[test]
    fn test_parse_timestamp_invalid_values() {
        assert!(parse_timestamp("2024-13-15 14:30:00 +0000 UTC").is_err());
        assert!(parse_timestamp("2023-02-29 12:00:00 +0000 UTC").is_err());
        assert!(parse_timestamp("2024-01-15 24:30:00 +0000 UTC").is_err());
        assert!(parse_timestamp("2024-01-15 14:60:00 +0000 UTC").is_err());
    }

    #[test]
    fn test_parse_timestamp_error_carries_trimmed_input() {
        match parse_timestamp("  yesterday  ") {
            Err(GltError::InvalidDate(text)) => assert_eq!(text, "yesterday"),
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_unset_timestamp_is_epoch() {
        let unset = unset_timestamp();
        assert_eq!(unset.timestamp(), 0);
        assert_eq!(unset.offset().local_minus_utc(), 0);
    }
}
