//! Reserved-key clash resolution
//!
//! A user field named `time`, `msg` or `level` would otherwise be silently
//! replaced by the entry's own slot when the two are written into one flat
//! mapping. Logging `level = 1` at info level therefore comes out as
//!
//! ```text
//! {"fields.level":1,"level":"info","msg":"hello","time":"..."}
//! ```

use super::fields::Fields;
use super::reserved::ReservedKey;

/// Move user fields off the reserved keys
///
/// Each of `time`, `msg` and `level` present in `fields` is removed and
/// re-inserted under its `fields.`-prefixed name. Other keys are untouched.
/// The mapping is rewritten in place; formatters call this on their own copy.
///
/// Known limitation: a pre-existing `fields.time` (or `fields.msg`,
/// `fields.level`) is overwritten by the renamed value. Existing consumers
/// rely on this output, so it is kept.
///
/// ```
/// use rust_log_formatter::core::{prefix_field_clashes, Fields};
///
/// let mut fields = Fields::new().with_field("level", 1).with_field("user", "alice");
/// prefix_field_clashes(&mut fields);
///
/// assert!(fields.contains_key("fields.level"));
/// assert!(!fields.contains_key("level"));
/// ```
pub fn prefix_field_clashes(fields: &mut Fields) {
    for (key, renamed) in ReservedKey::clash_renames() {
        if let Some(value) = fields.remove(key) {
            tracing::trace!(key, renamed, "renaming clashing field");
            fields.insert(renamed, value);
        }
    }
}
