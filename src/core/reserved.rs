//! Reserved entry keys
//!
//! The keys an entry's own slots occupy in formatted output. They are part of
//! the output contract read by downstream log consumers.

use std::fmt;

/// Prefix applied to a user field whose key clashes with a reserved key
pub const CLASH_PREFIX: &str = "fields.";

/// A key reserved for an entry's metadata slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedKey {
    /// Entry timestamp: `time`
    Time,
    /// Entry message: `msg`
    Message,
    /// Entry severity: `level`
    Level,
    /// Error attached to the entry: `error`
    Error,
}

impl ReservedKey {
    /// Every reserved key
    pub const ALL: [ReservedKey; 4] = [
        ReservedKey::Time,
        ReservedKey::Message,
        ReservedKey::Level,
        ReservedKey::Error,
    ];

    /// Keys that user fields are renamed away from, in rename order
    pub const CLASHING: [ReservedKey; 3] =
        [ReservedKey::Time, ReservedKey::Message, ReservedKey::Level];

    /// Canonical output key
    pub const fn key(&self) -> &'static str {
        match self {
            ReservedKey::Time => "time",
            ReservedKey::Message => "msg",
            ReservedKey::Level => "level",
            ReservedKey::Error => "error",
        }
    }

    /// Key a clashing user field is moved to
    ///
    /// `None` for [`ReservedKey::Error`]: error fields are stored under the
    /// reserved key on purpose and formatters render them themselves.
    pub const fn clash_key(&self) -> Option<&'static str> {
        match self {
            ReservedKey::Time => Some("fields.time"),
            ReservedKey::Message => Some("fields.msg"),
            ReservedKey::Level => Some("fields.level"),
            ReservedKey::Error => None,
        }
    }

    /// `(key, clash_key)` pairs for the keys in [`ReservedKey::CLASHING`]
    pub fn clash_renames() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::CLASHING
            .into_iter()
            .filter_map(|reserved| reserved.clash_key().map(|renamed| (reserved.key(), renamed)))
    }

    /// Look up the reserved key with this exact spelling
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reserved| reserved.key() == key)
    }
}

impl fmt::Display for ReservedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_keys() {
        assert_eq!(ReservedKey::Time.key(), "time");
        assert_eq!(ReservedKey::Message.key(), "msg");
        assert_eq!(ReservedKey::Level.key(), "level");
        assert_eq!(ReservedKey::Error.key(), "error");
    }

    #[test]
    fn test_clash_keys_use_prefix() {
        for reserved in ReservedKey::CLASHING {
            let renamed = reserved.clash_key().expect("clashing key has a rename");
            assert_eq!(renamed, format!("{}{}", CLASH_PREFIX, reserved.key()));
        }
        assert_eq!(ReservedKey::Error.clash_key(), None);
    }

    #[test]
    fn test_clash_renames_cover_clashing_set() {
        let renames: Vec<_> = ReservedKey::clash_renames().collect();
        assert_eq!(
            renames,
            vec![
                ("time", "fields.time"),
                ("msg", "fields.msg"),
                ("level", "fields.level"),
            ]
        );
    }

    #[test]
    fn test_from_key() {
        assert_eq!(ReservedKey::from_key("msg"), Some(ReservedKey::Message));
        assert_eq!(ReservedKey::from_key("error"), Some(ReservedKey::Error));
        assert_eq!(ReservedKey::from_key("message"), None);
        assert_eq!(ReservedKey::from_key("TIME"), None);
    }
}
