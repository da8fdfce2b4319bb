//! JSON formatter for structured logging

use crate::core::{
    prefix_field_clashes, Entry, FormatError, Formatter, ReservedKey, Result, TimestampFormat,
};
use serde_json::{Map, Value};

const JSON_FORMAT: &str = "json";

/// Formats each entry as a single-line JSON object (JSONL)
///
/// Example: `{"level":"info","msg":"Request processed","time":"2025-01-08T10:30:45Z","user":"alice"}`
///
/// Compatible with log aggregation tools like ELK, Loki, etc.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
    disable_timestamp: bool,
    data_key: Option<String>,
    pretty_print: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format
    ///
    /// Unix formats are written as JSON numbers.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Leave the `time` key out of the output
    #[must_use]
    pub fn with_disable_timestamp(mut self, disable: bool) -> Self {
        self.disable_timestamp = disable;
        self
    }

    /// Nest all user fields under `key`
    ///
    /// A key equal to `time`, `msg` or `level` is moved to its `fields.`
    /// name like a clashing field, so the nested object is not overwritten.
    #[must_use]
    pub fn with_data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }

    /// Emit indented, multi-line JSON
    #[must_use]
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Build the complete JSON object before anything is written
    fn to_object(&self, entry: &Entry) -> Result<Map<String, Value>> {
        let mut fields = entry.fields.clone();
        prefix_field_clashes(&mut fields);

        let mut data = Map::new();
        for (key, value) in fields {
            let json = value
                .to_json_value()
                .map_err(|e| FormatError::serialization(JSON_FORMAT, e))?;
            data.insert(key, json);
        }

        let mut object = match &self.data_key {
            Some(data_key) => {
                let nest_key = ReservedKey::from_key(data_key)
                    .and_then(|reserved| reserved.clash_key())
                    .unwrap_or(data_key);
                let mut nested = Map::new();
                nested.insert(nest_key.to_string(), Value::Object(data));
                nested
            }
            None => data,
        };

        if !self.disable_timestamp {
            let time = self
                .timestamp_format
                .to_json_value(&entry.time)
                .map_err(|e| FormatError::serialization(JSON_FORMAT, e))?;
            object.insert(ReservedKey::Time.key().to_string(), time);
        }
        object.insert(
            ReservedKey::Message.key().to_string(),
            Value::String(entry.message.clone()),
        );
        object.insert(
            ReservedKey::Level.key().to_string(),
            Value::String(entry.level.as_str().to_string()),
        );

        Ok(object)
    }

    fn render(&self, entry: &Entry) -> Result<Vec<u8>> {
        let object = Value::Object(self.to_object(entry)?);

        let mut buf = if self.pretty_print {
            serde_json::to_vec_pretty(&object)
        } else {
            serde_json::to_vec(&object)
        }
        .map_err(|e| FormatError::serialization(JSON_FORMAT, e))?;

        buf.push(b'\n');
        Ok(buf)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        self.render(entry).inspect_err(|e| {
            tracing::debug!(formatter = JSON_FORMAT, error = %e, "failed to format entry");
        })
    }

    fn name(&self) -> &str {
        JSON_FORMAT
    }
}
