//! Comparison output types.
//!
//! All types implement `Debug, Clone, PartialEq`; [`Diff`] also round-trips
//! through serde so that diff lists can be stored as test fixtures.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One leaf-level mismatch between the expected and the actual value.
///
/// An empty `field` denotes the root of the comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Diff {
    /// Path of the differing value, e.g. `.items[2].name`
    pub field: String,
    /// Snapshot of the expected value
    pub expected: Value,
    /// Snapshot of the actual value
    pub actual: Value,
}

impl Diff {
    pub fn new(field: impl Into<String>, expected: Value, actual: Value) -> Self {
        Self {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// The field path, with the root rendered as `(root)`.
    pub fn display_field(&self) -> &str {
        if self.field.is_empty() {
            "(root)"
        } else {
            &self.field
        }
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, actual {}",
            self.display_field(),
            self.expected,
            self.actual
        )
    }
}

/// Compositional location of a value inside the compared structure.
///
/// Paths are diagnostic only and are never parsed back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Struct member access: `path.name`
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    /// Array or slice element: `path[index]`
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    /// Map entry: `path[key]`
    pub fn key(&self, label: &str) -> Self {
        Self(format!("{}[{}]", self.0, label))
    }

    /// Pointer dereference: `*(path)`
    pub fn deref(&self) -> Self {
        Self(format!("*({})", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
