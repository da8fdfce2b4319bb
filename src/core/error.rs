//! Error types for entry formatting

use std::error::Error as StdError;

pub type Result<T> = std::result::Result<T, FormatError>;

/// Failure raised by a [`Formatter`](super::Formatter).
///
/// Formatting has a single failure mode: some part of the entry could not be
/// encoded in the target representation. The failing field is not reported.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Encoding the entry failed
    #[error("Serialization error ({format_type}): {source}")]
    Serialization {
        format_type: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl FormatError {
    /// Create a serialization error for the named formatter
    pub fn serialization(
        format_type: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        FormatError::Serialization {
            format_type: format_type.into(),
            source: source.into(),
        }
    }

    /// Name of the formatter that failed
    pub fn format_type(&self) -> &str {
        match self {
            FormatError::Serialization { format_type, .. } => format_type,
        }
    }
}

/// Returned when a string does not name a [`Level`](super::Level)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid log level: '{input}'")]
pub struct ParseLevelError {
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = FormatError::serialization("json", "key must be a string");
        assert!(matches!(err, FormatError::Serialization { .. }));
        assert_eq!(err.format_type(), "json");
    }

    #[test]
    fn test_error_display() {
        let err = FormatError::serialization("text", "bad value");
        assert_eq!(err.to_string(), "Serialization error (text): bad value");

        let err = ParseLevelError {
            input: "loud".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid log level: 'loud'");
    }

    #[test]
    fn test_error_source_is_preserved() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FormatError::serialization("json", json_err);

        let source = err.source().expect("source attached");
        assert!(source.to_string().contains("EOF"));
    }
}
