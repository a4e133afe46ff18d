//! Lenient timestamp parsing for records written by older deployments.
//!
//! Accepted on read: RFC 3339 with an offset, and naive date-times with
//! either a `T` or a space between date and time, optionally with a
//! fractional second. Naive values are taken as UTC. Writing always uses the
//! default chrono formats.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| parse_naive(raw).map(|naive| naive.and_utc()))
}

pub fn naive<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_naive(&raw).ok_or_else(|| de::Error::custom(format!("invalid date-time: {}", raw)))
}

pub fn utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_naive_separators() {
        let midnight = NaiveDate::from_ymd_opt(2025, 12, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(parse_naive("2025-12-01T00:00:00"), Some(midnight));
        assert_eq!(parse_naive("2025-12-01 00:00:00"), Some(midnight));
        assert_eq!(parse_naive("2025-12-01T00:00:00Z"), Some(midnight));
        assert_eq!(parse_naive("01/12/2025"), None);
    }

    #[test]
    fn test_parse_naive_fractional_seconds() {
        let parsed = parse_naive("2025-10-16 14:22:05.123456").unwrap();

        assert_eq!(parsed.second(), 5);
        assert_eq!(parsed.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_parse_utc_treats_naive_as_utc() {
        let parsed = parse_utc("2024-01-15T10:30:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-15T10:30:00+00:00");

        let offset = parse_utc("2024-01-15T12:30:00+02:00").unwrap();
        assert_eq!(offset, parsed);

        assert!(parse_utc("yesterday").is_none());
    }
}
