//! Macros for building field mappings.
//!
//! # Examples
//!
//! ```
//! use rust_log_formatter::fields;
//!
//! let fields = fields! {
//!     "user" => "alice",
//!     "attempt" => 3,
//! };
//! assert_eq!(fields.len(), 2);
//! ```

/// Build a [`Fields`](crate::Fields) mapping from `key => value` pairs.
///
/// Keys keep the order they are written in. Values accept anything that
/// converts into a [`FieldValue`](crate::FieldValue).
///
/// # Examples
///
/// ```
/// use rust_log_formatter::prelude::*;
/// use rust_log_formatter::fields;
///
/// let entry = Entry::new(Level::Info, "login")
///     .with_fields(fields! { "user" => "alice", "admin" => false });
/// assert!(entry.fields.contains_key("admin"));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert($key, $value);
        )+
        fields
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::FieldValue;

    #[test]
    fn test_empty_fields_macro() {
        let fields = fields!();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_fields_macro_order_and_values() {
        let fields = fields! {
            "b" => 2,
            "a" => "one",
            "c" => true,
        };

        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(fields.get("a"), Some(&FieldValue::from("one")));
    }
}
