//! Query assembly
//!
//! Builds the structured request objects the search backend executes: the
//! multi-field weighted full-text node, the public request (optionally with
//! an identity boost), and the access-filtered request whose visibility
//! filters restrict results to records the requesting principal owns or that
//! are public.

use std::collections::BTreeMap;

use crate::config::SearchConfig;
use crate::error::Result;

use super::nodes::{BoolQuery, MatchQuery, QueryNode, QueryStringQuery, TermQuery, TermsQuery};
use super::request::{Highlight, HighlightField, SearchRequest};
use super::sort::resolve_sort;

pub const TITLE_WEIGHT: f64 = 4.0;
pub const DESCRIPTION_WEIGHT: f64 = 1.2;
pub const JOB_SCHOOL_BOOST: f64 = 1.0;
pub const ALL_JOB_SCHOOL_BOOST: f64 = 0.125;

/// Boost for the requesting user's own record
const USER_GUID_BOOST: f32 = 10.0;

const FIELD_BOOSTS: [(&str, f64); 6] = [
    ("title", TITLE_WEIGHT),
    ("description", DESCRIPTION_WEIGHT),
    ("job", JOB_SCHOOL_BOOST),
    ("school", JOB_SCHOOL_BOOST),
    ("all_jobs", ALL_JOB_SCHOOL_BOOST),
    ("all_schools", ALL_JOB_SCHOOL_BOOST),
];

/// Categories that share the node visibility fields
const NODE_CATEGORIES: [&str; 4] = ["project", "component", "registration", "preprint"];

/// Categories visible to everyone, admitted without a visibility check
const ALWAYS_PUBLIC_CATEGORIES: [&str; 3] = ["user", "institution", "collectionsubmission"];

/// Identity of the requesting principal
///
/// An opaque id supplied by the surrounding auth layer; the compiler only
/// reads it to build owned-or-public visibility filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessContext {
    principal_id: String,
}

impl AccessContext {
    /// Create an access context for the given principal id
    pub fn new(principal_id: impl Into<String>) -> Self {
        Self {
            principal_id: principal_id.into(),
        }
    }

    /// The opaque principal id
    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }
}

/// Build the multi-field weighted full-text node for a compiled query string
pub fn build_query_string(qs: &str) -> QueryNode {
    let mut fields: Vec<String> = FIELD_BOOSTS
        .iter()
        .map(|(field, weight)| format!("{}^{}", field, weight))
        .collect();
    fields.push("_all^1".to_string());

    QueryNode::QueryString(QueryStringQuery::new(qs, fields))
}

/// Build a public search request
///
/// With a `user_guid` the full-text node is unioned with a heavily boosted
/// exact match on the identity field, so a user searching their own name
/// finds themselves first.
pub fn build_query(
    qs: &str,
    start: u64,
    size: u64,
    sort: Option<&str>,
    user_guid: Option<&str>,
) -> Result<SearchRequest> {
    let fulltext = build_query_string(qs);
    let query = match user_guid {
        Some(guid) => QueryNode::Bool(
            BoolQuery::new()
                .should(fulltext)
                .should(MatchQuery::new("id", guid).with_boost(USER_GUID_BOOST)),
        ),
        None => fulltext,
    };

    Ok(SearchRequest {
        query,
        from: start,
        size,
        sort: sort.map(resolve_sort).transpose()?,
        highlight: None,
    })
}

/// Category match AND (principal is a contributor OR the record is public)
fn owned_or_public(
    category: impl Into<QueryNode>,
    contributor_field: &str,
    public_field: &str,
    user: &AccessContext,
) -> QueryNode {
    QueryNode::Bool(
        BoolQuery::new().must(category).must(
            BoolQuery::new()
                .should(TermQuery::new(contributor_field, user.principal_id()))
                .should(TermQuery::new(public_field, true)),
        ),
    )
}

/// Build an access-filtered search request
///
/// Only records visible to `user` can match: per-category owned-or-public
/// sub-filters, plus a membership test admitting the always-public
/// categories unconditionally. The response is highlighted with the same
/// full-text node the request matches with.
pub fn build_private_search_query(
    user: &AccessContext,
    qs: &str,
    start: u64,
    size: u64,
    sort: Option<&str>,
    config: &SearchConfig,
) -> Result<SearchRequest> {
    let match_node = owned_or_public(
        TermsQuery::new(
            "category",
            NODE_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        ),
        "contributors.id",
        "public",
        user,
    );
    let match_file = owned_or_public(
        TermQuery::new("category", "file"),
        "node_contributors.id",
        "node_public",
        user,
    );
    let match_wiki = owned_or_public(
        TermQuery::new("category", "wiki"),
        "node_contributors.id",
        "node_public",
        user,
    );
    let match_comment = owned_or_public(
        TermQuery::new("category", "comment"),
        "node_contributors.id",
        "node_public",
        user,
    );

    let inner_query = build_query_string(qs);

    // The visibility constraint sits under "must", not "filter": a bool with
    // only "should" clauses inside a filter context would require at least
    // one clause to match before scoring even starts.
    let query = QueryNode::Bool(
        BoolQuery::new().must(inner_query.clone()).must(
            BoolQuery::new()
                .should(match_node)
                .should(match_file)
                .should(match_wiki)
                .should(match_comment)
                .should(TermsQuery::new(
                    "category",
                    ALWAYS_PUBLIC_CATEGORIES
                        .iter()
                        .map(|c| c.to_string())
                        .collect(),
                )),
        ),
    );

    let mut highlight_fields = BTreeMap::new();
    highlight_fields.insert("text".to_string(), HighlightField::default());

    Ok(SearchRequest {
        query,
        from: start,
        size,
        sort: sort.map(resolve_sort).transpose()?,
        highlight: Some(Highlight {
            fragment_size: config.highlight_fragment_size,
            number_of_fragments: config.highlight_number_of_fragments,
            pre_tags: vec!["<b><i>".to_string()],
            post_tags: vec!["</i></b>".to_string()],
            fields: highlight_fields,
            require_field_match: false,
            highlight_query: inner_query,
        }),
    })
}
