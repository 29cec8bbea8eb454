//! Query string query - multi-field weighted full-text match
//!
//! Takes an already compiled query string (see [`crate::compile`]) and runs
//! it against a weighted field list through the backend's own mini-language
//! parser.

use serde::Serialize;

/// Multi-field weighted query-string clause
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryStringQuery {
    /// Field searched for unqualified terms
    pub default_field: String,
    /// Fields with their weights, rendered as `field^weight`
    pub fields: Vec<String>,
    /// The compiled query string
    pub query: String,
    /// Analyze wildcard terms instead of matching them verbatim
    pub analyze_wildcard: bool,
    /// Degrade malformed sub-expressions gracefully instead of failing
    pub lenient: bool,
}

impl QueryStringQuery {
    /// Create a query-string clause over the given weighted fields
    pub fn new(query: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            default_field: "_all".to_string(),
            fields,
            query: query.into(),
            analyze_wildcard: true,
            lenient: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_string_serialization() {
        let query = QueryStringQuery::new("abc", vec!["title^4".to_string(), "_all^1".to_string()]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "default_field": "_all",
                "fields": ["title^4", "_all^1"],
                "query": "abc",
                "analyze_wildcard": true,
                "lenient": true
            })
        );
    }
}
