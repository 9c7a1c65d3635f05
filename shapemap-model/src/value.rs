use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A value-like payload carried between two shapes during a structural copy.
///
/// Only these kinds participate in direct field binding. Nested objects are
/// deliberately excluded: copying them would recurse through arbitrary object
/// graphs, which is handled by override routines instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
}

impl ScalarValue {
    /// Returns the kind tag for this value.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Int(_) => FieldKind::Int,
            Self::UInt(_) => FieldKind::UInt,
            Self::Float(_) => FieldKind::Float,
            Self::Bool(_) => FieldKind::Bool,
            Self::Text(_) => FieldKind::Text,
            Self::Timestamp(_) => FieldKind::Timestamp,
        }
    }
}

/// The declared kind of a schema field.
///
/// `Composite` marks a nested object field. Composite fields never take part
/// in direct binding; they are either covered by an override routine or left
/// at their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Int,
    UInt,
    Float,
    Bool,
    Text,
    Timestamp,
    Composite,
}

impl FieldKind {
    /// True for every kind except `Composite`.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::Composite)
    }
}

/// The bound values a destination instance is constructed from.
///
/// Holds both constructor arguments and direct field bindings under the
/// destination-side name. Built fresh for every conversion and dropped as
/// soon as the destination exists; never shared between calls.
#[derive(Debug, Default)]
pub struct ValueBag {
    values: HashMap<&'static str, ScalarValue>,
}

impl ValueBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` under the destination-side `name`. A later insert for
    /// the same name replaces the earlier one.
    pub fn insert(&mut self, name: &'static str, value: ScalarValue) {
        self.values.insert(name, value);
    }

    /// Returns the raw bound value, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ScalarValue> {
        self.values.get(name)
    }

    /// Number of bound values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extract a signed integer, or `None` if absent or of another kind.
    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ScalarValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Extract an unsigned integer.
    #[must_use]
    pub fn uint(&self, name: &str) -> Option<u64> {
        match self.values.get(name) {
            Some(ScalarValue::UInt(v)) => Some(*v),
            _ => None,
        }
    }

    /// Extract a float.
    #[must_use]
    pub fn float(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(ScalarValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Extract a boolean.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(ScalarValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Extract a text value.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ScalarValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Extract a timestamp (milliseconds since the Unix epoch).
    #[must_use]
    pub fn timestamp(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ScalarValue::Timestamp(v)) => Some(*v),
            _ => None,
        }
    }
}
