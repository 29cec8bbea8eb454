//! Terms query - matches documents whose field holds any of the given values

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Set-membership clause on a single field
///
/// Serializes with the field name as the key:
/// `{"terms": {"category": ["user", "institution"]}}`.
#[derive(Clone, Debug, PartialEq)]
pub struct TermsQuery {
    /// Field to match on
    pub field: String,
    /// Values, of which at least one must match
    pub values: Vec<String>,
}

impl TermsQuery {
    /// Create a new terms query
    pub fn new(field: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            field: field.into(),
            values,
        }
    }

    /// Add a value to the query
    pub fn add_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }
}

impl Serialize for TermsQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.values)?;
        map.end()
    }
}
