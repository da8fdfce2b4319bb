//! Timestamp formatting utilities
//!
//! Provides configurable textual representations for the `time` slot of an
//! entry. RFC 3339 is the default.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Timestamp representation options
///
/// # Examples
///
/// ```
/// use rust_log_formatter::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let time = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let text = TimestampFormat::default().try_format(&time).unwrap();
/// assert_eq!(text, "2025-01-08T10:30:45Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339, second precision: `2025-01-08T10:30:45Z`
    #[default]
    Rfc3339,

    /// RFC 3339 with nanoseconds: `2025-01-08T10:30:45.123456789Z`
    Rfc3339Nanos,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601Millis,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_log_formatter::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Render a timestamp
    ///
    /// Fails only for a `Custom` pattern chrono cannot interpret.
    pub fn try_format(&self, datetime: &DateTime<Utc>) -> Result<String, fmt::Error> {
        Ok(match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Nanos => {
                datetime.to_rfc3339_opts(SecondsFormat::Nanos, true)
            }
            TimestampFormat::Iso8601Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
            TimestampFormat::Unix | TimestampFormat::UnixMillis | TimestampFormat::UnixMicros => {
                self.unix_timestamp(datetime).unwrap_or_default().to_string()
            }
            TimestampFormat::Custom(format_str) => {
                // DelayedFormat panics in to_string() on a bad pattern; write! reports it
                let mut out = String::new();
                write!(out, "{}", datetime.format(format_str))?;
                out
            }
        })
    }

    /// JSON rendering: numbers for the Unix formats, strings otherwise
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> Result<serde_json::Value, fmt::Error> {
        Ok(match self.unix_timestamp(datetime) {
            Some(number) => serde_json::Value::Number(number.into()),
            None => serde_json::Value::String(self.try_format(datetime)?),
        })
    }

    /// Numeric value for the Unix formats, `None` for textual ones
    fn unix_timestamp(&self, datetime: &DateTime<Utc>) -> Option<i64> {
        match self {
            TimestampFormat::Unix => Some(datetime.timestamp()),
            TimestampFormat::UnixMillis => Some(datetime.timestamp_millis()),
            TimestampFormat::UnixMicros => Some(datetime.timestamp_micros()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_rfc3339_default() {
        let result = TimestampFormat::default()
            .try_format(&fixed_datetime())
            .unwrap();
        assert_eq!(result, "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_rfc3339_nanos_format() {
        let result = TimestampFormat::Rfc3339Nanos
            .try_format(&fixed_datetime())
            .unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123456000Z");
    }

    #[test]
    fn test_iso8601_millis_format() {
        let result = TimestampFormat::Iso8601Millis
            .try_format(&fixed_datetime())
            .unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_unix_formats() {
        let time = fixed_datetime();
        assert_eq!(TimestampFormat::Unix.try_format(&time).unwrap(), "1736332245");
        assert_eq!(
            TimestampFormat::UnixMillis.try_format(&time).unwrap(),
            "1736332245123"
        );
        assert_eq!(
            TimestampFormat::UnixMicros.try_format(&time).unwrap(),
            "1736332245123456"
        );
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.try_format(&fixed_datetime()).unwrap(), "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_format_is_error() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert!(format.try_format(&fixed_datetime()).is_err());
    }

    #[test]
    fn test_json_value() {
        let time = fixed_datetime();
        assert_eq!(
            TimestampFormat::Unix.to_json_value(&time).unwrap(),
            serde_json::json!(1736332245)
        );
        assert!(TimestampFormat::Rfc3339.to_json_value(&time).unwrap().is_string());
    }

    #[test]
    fn test_json_value_matches_text_for_unix_formats() {
        let time = fixed_datetime();
        for format in [
            TimestampFormat::Unix,
            TimestampFormat::UnixMillis,
            TimestampFormat::UnixMicros,
        ] {
            let text = format.try_format(&time).unwrap();
            assert_eq!(format.to_json_value(&time).unwrap().to_string(), text);
        }
        assert!(TimestampFormat::Custom("%s".to_string())
            .to_json_value(&time)
            .unwrap()
            .is_string());
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str("\"Rfc3339\"").expect("deserialize Rfc3339");
        assert_eq!(format, TimestampFormat::Rfc3339);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
