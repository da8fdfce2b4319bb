//! Log entry structure

use super::fields::{FieldValue, Fields};
use super::level::Level;
use super::reserved::ReservedKey;
use chrono::{DateTime, Utc};

/// One log event as handed to a formatter
///
/// The message, time and level slots are always written under their reserved
/// keys. User fields live in `fields`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub fields: Fields,
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
}

impl Entry {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            fields: Fields::new(),
            time: Utc::now(),
            level,
            message: message.into(),
        }
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key, value);
        self
    }

    /// Merge fields into the entry; later values win on duplicate keys
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Attach an error under the `error` key
    pub fn with_error(mut self, err: &(dyn std::error::Error + '_)) -> Self {
        self.fields
            .insert(ReservedKey::Error.key(), FieldValue::error(err));
        self
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entry_builders() {
        let time = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");

        let entry = Entry::new(Level::Warn, "write failed")
            .with_field("path", "/var/log/app.log")
            .with_error(&io_err)
            .with_time(time);

        assert_eq!(entry.level, Level::Warn);
        assert_eq!(entry.message, "write failed");
        assert_eq!(entry.time, time);
        assert_eq!(
            entry.fields.get("error"),
            Some(&FieldValue::Error("disk full".to_string()))
        );
    }

    #[test]
    fn test_with_fields_later_wins() {
        let entry = Entry::new(Level::Info, "merge")
            .with_field("user", "alice")
            .with_fields(Fields::new().with_field("user", "bob").with_field("id", 7));

        assert_eq!(entry.fields.get("user"), Some(&FieldValue::from("bob")));
        assert_eq!(entry.fields.len(), 2);
    }
}
