//! Match query - analyzed full-text match on one field

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Analyzed match clause on a single field
///
/// Without a boost it serializes in the short form `{"id": "abcde"}`; with
/// one, in the parameter form `{"id": {"query": "abcde", "boost": 10.0}}`.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchQuery {
    /// Field to match on
    pub field: String,
    /// Text to analyze and match
    pub query: String,
    /// Optional scoring boost
    pub boost: Option<f32>,
}

impl MatchQuery {
    /// Create a new match query
    pub fn new(field: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            query: query.into(),
            boost: None,
        }
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }
}

#[derive(serde::Serialize)]
struct MatchParams<'a> {
    query: &'a str,
    boost: f32,
}

impl Serialize for MatchQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self.boost {
            Some(boost) => map.serialize_entry(
                &self.field,
                &MatchParams {
                    query: &self.query,
                    boost,
                },
            )?,
            None => map.serialize_entry(&self.field, &self.query)?,
        }
        map.end()
    }
}
