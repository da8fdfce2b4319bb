//! Core formatting types and traits

pub mod clash;
pub mod entry;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod level;
pub mod output_format;
pub mod reserved;
pub mod timestamp;

pub use clash::prefix_field_clashes;
pub use entry::Entry;
pub use error::{FormatError, ParseLevelError, Result};
pub use fields::{FieldValue, Fields, SerializeField};
pub use formatter::Formatter;
pub use level::Level;
pub use output_format::{FormatterConfig, OutputFormat};
pub use reserved::{ReservedKey, CLASH_PREFIX};
pub use timestamp::TimestampFormat;
