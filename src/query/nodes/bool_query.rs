//! Boolean query - combines sub-queries with must/should/filter semantics

use serde::Serialize;

use super::QueryNode;

/// Boolean combination of sub-queries
///
/// `must` clauses all have to match and contribute to scoring, `should`
/// clauses form a union, `filter` clauses constrain without scoring. Empty
/// clause lists are left off the wire entirely.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BoolQuery {
    /// All of these must match
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<QueryNode>,
    /// At least one of these should match
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<QueryNode>,
    /// Non-scoring constraints
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<QueryNode>,
}

impl BoolQuery {
    /// Create an empty boolean query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a must clause
    pub fn must(mut self, query: impl Into<QueryNode>) -> Self {
        self.must.push(query.into());
        self
    }

    /// Add a should clause
    pub fn should(mut self, query: impl Into<QueryNode>) -> Self {
        self.should.push(query.into());
        self
    }

    /// Add a filter clause
    pub fn filter(mut self, query: impl Into<QueryNode>) -> Self {
        self.filter.push(query.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::super::TermQuery;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool_query_builder() {
        let query = BoolQuery::new()
            .must(TermQuery::new("category", "file"))
            .should(TermQuery::new("public", true));

        assert_eq!(query.must.len(), 1);
        assert_eq!(query.should.len(), 1);
        assert!(query.filter.is_empty());
    }

    #[test]
    fn test_empty_clause_lists_omitted() {
        let query = BoolQuery::new().should(TermQuery::new("public", true));
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "should": [ { "term": { "public": true } } ] })
        );
    }

    #[test]
    fn test_nested_bool_serialization() {
        let query = BoolQuery::new().must(
            BoolQuery::new()
                .should(TermQuery::new("contributors.id", "abcde"))
                .should(TermQuery::new("public", true)),
        );

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "must": [
                    {
                        "bool": {
                            "should": [
                                { "term": { "contributors.id": "abcde" } },
                                { "term": { "public": true } }
                            ]
                        }
                    }
                ]
            })
        );
    }
}
