//! Formatter trait for entry serialization strategies

use super::{entry::Entry, error::Result};
use std::sync::Arc;

/// Turns an [`Entry`] into the bytes written to a sink
///
/// Implementations run [`prefix_field_clashes`](super::prefix_field_clashes)
/// on a private copy of the entry's fields before serializing, and write the
/// entry's time, level and message under their reserved keys. `format` must
/// not keep state between calls; each call returns its own buffer. On error
/// no output is produced.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>>;
    fn name(&self) -> &str;
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        (**self).format(entry)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        (**self).format(entry)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
