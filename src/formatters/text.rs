//! Line-oriented `key=value` formatter

use std::borrow::Cow;

use crate::core::{
    prefix_field_clashes, Entry, FieldValue, Fields, FormatError, Formatter, ReservedKey, Result,
    TimestampFormat,
};

const TEXT_FORMAT: &str = "text";

/// Formats entries as a single line of `key=value` pairs
///
/// Example: `time="2025-01-08T10:30:45Z" level=info msg="Request processed" user=alice`
///
/// With colors enabled the terminal layout is used instead:
/// `INFO[2025-01-08T10:30:45Z] Request processed                            user=alice`
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    timestamp_format: TimestampFormat,
    disable_timestamp: bool,
    sort_keys: bool,
    force_quote: bool,
    disable_quote: bool,
    colors: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    /// Leave the `time` pair out of the output
    #[must_use]
    pub fn with_disable_timestamp(mut self, disable: bool) -> Self {
        self.disable_timestamp = disable;
        self
    }

    /// Write fields sorted by key instead of in insertion order
    #[must_use]
    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }

    /// Quote every value
    #[must_use]
    pub fn with_force_quote(mut self, force: bool) -> Self {
        self.force_quote = force;
        self
    }

    /// Never quote values
    ///
    /// Line breaks and tabs are still escaped so one entry stays one line.
    #[must_use]
    pub fn with_disable_quote(mut self, disable: bool) -> Self {
        self.disable_quote = disable;
        self
    }

    /// Use the colored terminal layout
    ///
    /// Has no effect unless the `colors` feature is enabled.
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    fn render(&self, entry: &Entry) -> Result<String> {
        let mut fields = entry.fields.clone();
        prefix_field_clashes(&mut fields);
        if self.sort_keys {
            fields.sort_keys();
        }

        let timestamp = if self.disable_timestamp {
            None
        } else {
            let text = self
                .timestamp_format
                .try_format(&entry.time)
                .map_err(|e| FormatError::serialization(TEXT_FORMAT, e))?;
            Some(text)
        };

        let mut out = String::with_capacity(128);
        if self.colored() {
            self.write_colored(&mut out, entry, timestamp.as_deref(), &fields)?;
        } else {
            self.write_plain(&mut out, entry, timestamp.as_deref(), &fields)?;
        }
        out.push('\n');
        Ok(out)
    }

    fn write_plain(
        &self,
        out: &mut String,
        entry: &Entry,
        timestamp: Option<&str>,
        fields: &Fields,
    ) -> Result<()> {
        if let Some(timestamp) = timestamp {
            self.append_pair(out, ReservedKey::Time.key(), timestamp);
        }
        self.append_pair(out, ReservedKey::Level.key(), entry.level.as_str());
        self.append_pair(out, ReservedKey::Message.key(), &entry.message);

        for (key, value) in fields.iter() {
            self.append_pair(out, key, &field_text(value)?);
        }
        Ok(())
    }

    fn colored(&self) -> bool {
        self.colors && cfg!(feature = "colors")
    }

    #[cfg(feature = "colors")]
    fn write_colored(
        &self,
        out: &mut String,
        entry: &Entry,
        timestamp: Option<&str>,
        fields: &Fields,
    ) -> Result<()> {
        use colored::Colorize;

        let color = entry.level.color_code();
        let label = entry.level.short_label().color(color);
        let message = sanitize_message(entry.message.trim_end_matches('\n'));

        match timestamp {
            Some(timestamp) => out.push_str(&format!("{}[{}] {:<44}", label, timestamp, message)),
            None => out.push_str(&format!("{} {:<44}", label, message)),
        }

        for (key, value) in fields.iter() {
            out.push_str(&format!(" {}=", key_text(key).color(color)));
            self.append_value(out, &field_text(value)?);
        }
        Ok(())
    }

    #[cfg(not(feature = "colors"))]
    fn write_colored(
        &self,
        out: &mut String,
        entry: &Entry,
        timestamp: Option<&str>,
        fields: &Fields,
    ) -> Result<()> {
        self.write_plain(out, entry, timestamp, fields)
    }

    fn append_pair(&self, out: &mut String, key: &str, value: &str) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&key_text(key));
        out.push('=');
        self.append_value(out, value);
    }

    fn append_value(&self, out: &mut String, value: &str) {
        if self.needs_quoting(value) {
            out.push_str(&format!("{:?}", value));
        } else if self.disable_quote {
            out.push_str(&sanitize_message(value));
        } else {
            out.push_str(value);
        }
    }

    fn needs_quoting(&self, value: &str) -> bool {
        if self.force_quote {
            return true;
        }
        if self.disable_quote {
            return false;
        }
        !is_bare(value)
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        self.render(entry).map(String::into_bytes).inspect_err(|e| {
            tracing::debug!(formatter = TEXT_FORMAT, error = %e, "failed to format entry");
        })
    }

    fn name(&self) -> &str {
        TEXT_FORMAT
    }
}

/// Text shown for a field value; serde values are rendered as compact JSON
fn field_text(value: &FieldValue) -> Result<String> {
    match value {
        FieldValue::Serialized(value) => value
            .to_json_value()
            .map(|json| json.to_string())
            .map_err(|e| FormatError::serialization(TEXT_FORMAT, e)),
        other => Ok(other.to_string()),
    }
}

/// True when `text` can be written without quotes
fn is_bare(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+')
        })
}

/// Keys follow the value quoting rule regardless of the quote options
fn key_text(key: &str) -> Cow<'_, str> {
    if is_bare(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("{:?}", key))
    }
}

/// Escape line breaks so an unquoted message cannot forge extra log lines
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
