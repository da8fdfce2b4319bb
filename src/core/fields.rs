//! Structured key-value fields attached to an entry
//!
//! This module provides:
//! - `FieldValue`: a single field value
//! - `Fields`: the ordered field mapping of an entry
//! - `SerializeField`: the object-safe hook for arbitrary `Serialize` values

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Object-safe view of a user value that serializes through serde
///
/// Implemented for every `Serialize + Debug + Send + Sync` type. Encoding can
/// fail, e.g. for maps with non-string keys or a `Serialize` impl that
/// rejects cyclic data.
pub trait SerializeField: fmt::Debug + Send + Sync {
    fn to_json_value(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T> SerializeField for T
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Value type for structured logging fields
#[derive(Debug, Clone)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Display text of an error
    Error(String),
    /// Arbitrary serde value, encoded lazily by the formatter
    Serialized(Arc<dyn SerializeField>),
}

impl FieldValue {
    /// Capture an error's display text
    pub fn error(err: &(dyn std::error::Error + '_)) -> Self {
        FieldValue::Error(err.to_string())
    }

    /// Wrap any serializable value
    pub fn serialized<T>(value: T) -> Self
    where
        T: Serialize + fmt::Debug + Send + Sync + 'static,
    {
        FieldValue::Serialized(Arc::new(value))
    }

    /// Convert to serde_json::Value for JSON serialization
    ///
    /// Non-finite floats have no JSON representation and fail to encode.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        use serde::ser::Error as _;

        Ok(match self {
            FieldValue::String(s) | FieldValue::Error(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::UInt(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| {
                    serde_json::Error::custom(format!("unsupported float value {}", f))
                })?,
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Serialized(value) => value.to_json_value()?,
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FieldValue::Error(_))
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::UInt(a), FieldValue::UInt(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Error(a), FieldValue::Error(b)) => a == b,
            (FieldValue::Serialized(a), FieldValue::Serialized(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) | FieldValue::Error(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => f.write_str("null"),
            FieldValue::Serialized(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Ordered mapping of field names to values
///
/// Keys are unique. Insertion order is kept so text output is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    fields: IndexMap<String, FieldValue>,
}

impl Fields {
    /// Create a new empty field mapping
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Add a field (builder version)
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.insert(key, value);
        self
    }

    /// Insert a field, returning the value it replaced
    ///
    /// Replacing keeps the key's original position.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<FieldValue>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Remove a field, keeping the order of the remaining ones
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Sort fields by key
    pub fn sort_keys(&mut self) {
        self.fields.sort_keys();
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        fields.extend(iter);
        fields
    }
}

impl<K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Fields {
    type Item = (String, FieldValue);
    type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = indexmap::map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
