//! Term query - exact match on a single field value

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Value a term query matches against
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TermValue {
    /// Boolean flag (e.g. `public`)
    Bool(bool),
    /// Keyword value (ids, category names)
    String(String),
}

impl From<bool> for TermValue {
    fn from(value: bool) -> Self {
        TermValue::Bool(value)
    }
}

impl From<&str> for TermValue {
    fn from(value: &str) -> Self {
        TermValue::String(value.to_string())
    }
}

impl From<String> for TermValue {
    fn from(value: String) -> Self {
        TermValue::String(value)
    }
}

/// Exact-match clause on a single field
///
/// Serializes with the field name as the key: `{"term": {"public": true}}`.
#[derive(Clone, Debug, PartialEq)]
pub struct TermQuery {
    /// Field to match on
    pub field: String,
    /// Value the field must equal
    pub value: TermValue,
}

impl TermQuery {
    /// Create a new term query
    pub fn new(field: impl Into<String>, value: impl Into<TermValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl Serialize for TermQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.value)?;
        map.end()
    }
}
