//! Top-level search request sent to the backend

use serde::Serialize;
use std::collections::BTreeMap;

use super::nodes::QueryNode;
use super::sort::SortKey;

/// Per-field highlight options; currently always empty (`{}` on the wire)
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HighlightField {}

/// Highlighting configuration
///
/// `highlight_query` is set to the same full-text node the request matches
/// with, so highlighted fragments reflect exactly what matched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Highlight {
    pub fragment_size: u32,
    pub number_of_fragments: u32,
    pub pre_tags: Vec<String>,
    pub post_tags: Vec<String>,
    pub fields: BTreeMap<String, HighlightField>,
    pub require_field_match: bool,
    pub highlight_query: QueryNode,
}

/// The complete wire-level request body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchRequest {
    /// Structured query tree
    pub query: QueryNode,
    /// Pagination window start
    pub from: u64,
    /// Pagination window size
    pub size: u64,
    /// Resolved sort keys, if a directive was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortKey>>,
    /// Highlighting configuration, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

#[cfg(test)]
mod tests {
    use super::super::nodes::TermQuery;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_absent_options() {
        let request = SearchRequest {
            query: TermQuery::new("public", true).into(),
            from: 0,
            size: 10,
            sort: None,
            highlight: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": { "term": { "public": true } },
                "from": 0,
                "size": 10
            })
        );
    }

    #[test]
    fn test_highlight_serialization() {
        let mut fields = BTreeMap::new();
        fields.insert("text".to_string(), HighlightField::default());

        let highlight = Highlight {
            fragment_size: 200,
            number_of_fragments: 1,
            pre_tags: vec!["<b><i>".to_string()],
            post_tags: vec!["</i></b>".to_string()],
            fields,
            require_field_match: false,
            highlight_query: TermQuery::new("public", true).into(),
        };

        assert_eq!(
            serde_json::to_value(&highlight).unwrap(),
            json!({
                "fragment_size": 200,
                "number_of_fragments": 1,
                "pre_tags": ["<b><i>"],
                "post_tags": ["</i></b>"],
                "fields": { "text": {} },
                "require_field_match": false,
                "highlight_query": { "term": { "public": true } }
            })
        );
    }
}
