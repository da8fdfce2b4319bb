//! Output format selection and formatter configuration
//!
//! Provides the formatter strategies:
//! - Text: `key=value` line format (default)
//! - Json: one JSON object per line

use super::formatter::Formatter;
use super::timestamp::TimestampFormat;
use crate::formatters::{JsonFormatter, TextFormatter};
use serde::{Deserialize, Serialize};

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key=value` pairs (default)
    ///
    /// Example: `time="2025-01-08T10:30:45Z" level=info msg="Request processed"`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"level":"info","msg":"Request processed","time":"2025-01-08T10:30:45Z"}`
    Json,
}

impl OutputFormat {
    /// Formatter of this kind with default options
    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Configuration for building a formatter
///
/// Options that do not apply to the selected format are ignored. Can be
/// loaded from any serde source; missing keys take their defaults.
///
/// # Examples
///
/// ```
/// use rust_log_formatter::core::{FormatterConfig, OutputFormat, TimestampFormat};
///
/// let formatter = FormatterConfig::new()
///     .with_output_format(OutputFormat::Json)
///     .with_timestamp_format(TimestampFormat::UnixMillis)
///     .build();
/// assert_eq!(formatter.name(), "json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Serialization strategy
    pub output_format: OutputFormat,
    /// Representation of the `time` slot
    pub timestamp_format: TimestampFormat,
    /// Omit the `time` key
    pub disable_timestamp: bool,
    /// Text: sort field keys
    pub sort_keys: bool,
    /// Text: quote every value
    pub force_quote: bool,
    /// Text: never quote values
    pub disable_quote: bool,
    /// Text: colored terminal layout
    pub colors: bool,
    /// Json: nest user fields under this key
    pub data_key: Option<String>,
    /// Json: indented output
    pub pretty_print: bool,
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    #[must_use]
    pub fn with_disable_timestamp(mut self, disable: bool) -> Self {
        self.disable_timestamp = disable;
        self
    }

    #[must_use]
    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }

    #[must_use]
    pub fn with_force_quote(mut self, force: bool) -> Self {
        self.force_quote = force;
        self
    }

    #[must_use]
    pub fn with_disable_quote(mut self, disable: bool) -> Self {
        self.disable_quote = disable;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Build the configured formatter
    pub fn build(&self) -> Box<dyn Formatter> {
        match self.output_format {
            OutputFormat::Text => Box::new(self.text_formatter()),
            OutputFormat::Json => Box::new(self.json_formatter()),
        }
    }

    fn text_formatter(&self) -> TextFormatter {
        TextFormatter::new()
            .with_timestamp_format(self.timestamp_format.clone())
            .with_disable_timestamp(self.disable_timestamp)
            .with_sort_keys(self.sort_keys)
            .with_force_quote(self.force_quote)
            .with_disable_quote(self.disable_quote)
            .with_colors(self.colors)
    }

    fn json_formatter(&self) -> JsonFormatter {
        let formatter = JsonFormatter::new()
            .with_timestamp_format(self.timestamp_format.clone())
            .with_disable_timestamp(self.disable_timestamp)
            .with_pretty_print(self.pretty_print);
        match &self.data_key {
            Some(key) => formatter.with_data_key(key.clone()),
            None => formatter,
        }
    }
}
