//! Wire-level query node tree
//!
//! The structured query handed to the search backend is a tree of boolean
//! nodes. Only the clause kinds listed here may appear on the wire; the
//! tagged enum gives compile-time assurance of that, and the external tag is
//! exactly the backend's clause name:
//!
//! ```json
//! { "bool": { "must": [ { "term": { "public": true } } ] } }
//! ```

mod bool_query;
mod match_query;
mod query_string;
mod term_query;
mod terms_query;

pub use bool_query::BoolQuery;
pub use match_query::MatchQuery;
pub use query_string::QueryStringQuery;
pub use term_query::{TermQuery, TermValue};
pub use terms_query::TermsQuery;

use serde::Serialize;

/// One node of the structured query tree
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum QueryNode {
    /// Boolean combination of sub-queries
    #[serde(rename = "bool")]
    Bool(BoolQuery),
    /// Exact match on a single field value
    #[serde(rename = "term")]
    Term(TermQuery),
    /// Match any of a set of field values
    #[serde(rename = "terms")]
    Terms(TermsQuery),
    /// Analyzed full-text match on one field
    #[serde(rename = "match")]
    Match(MatchQuery),
    /// Multi-field weighted query-string match
    #[serde(rename = "query_string")]
    QueryString(QueryStringQuery),
}

impl From<BoolQuery> for QueryNode {
    fn from(query: BoolQuery) -> Self {
        QueryNode::Bool(query)
    }
}

impl From<TermQuery> for QueryNode {
    fn from(query: TermQuery) -> Self {
        QueryNode::Term(query)
    }
}

impl From<TermsQuery> for QueryNode {
    fn from(query: TermsQuery) -> Self {
        QueryNode::Terms(query)
    }
}

impl From<MatchQuery> for QueryNode {
    fn from(query: MatchQuery) -> Self {
        QueryNode::Match(query)
    }
}

impl From<QueryStringQuery> for QueryNode {
    fn from(query: QueryStringQuery) -> Self {
        QueryNode::QueryString(query)
    }
}
