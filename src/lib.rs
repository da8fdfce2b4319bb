//! # Rust Log Formatter
//!
//! The entry-formatting layer of a structured logging library: turns a log
//! [`Entry`] (message, timestamp, level and user fields) into bytes.
//!
//! ## Features
//!
//! - **Pluggable**: every strategy implements the [`Formatter`] trait
//! - **Text and JSON**: `key=value` lines and one JSON object per line
//! - **No silent overwrites**: user fields named `time`, `msg` or `level` are
//!   moved to `fields.time`, `fields.msg` and `fields.level`
//! - **Thread Safe**: formatters hold no mutable state
//!
//! ```
//! use rust_log_formatter::prelude::*;
//!
//! let entry = Entry::new(Level::Info, "hello").with_field("level", 1);
//! let bytes = JsonFormatter::new().format(&entry).unwrap();
//! let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
//!
//! assert_eq!(json["level"], "info");
//! assert_eq!(json["fields.level"], 1);
//! ```

pub mod core;
pub mod formatters;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        prefix_field_clashes, Entry, FieldValue, Fields, FormatError, Formatter, FormatterConfig,
        Level, OutputFormat, ReservedKey, Result, TimestampFormat,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter};
}

pub use core::{
    prefix_field_clashes, Entry, FieldValue, Fields, FormatError, Formatter, FormatterConfig,
    Level, OutputFormat, ParseLevelError, ReservedKey, Result, SerializeField, TimestampFormat,
    CLASH_PREFIX,
};
pub use formatters::{JsonFormatter, TextFormatter};
