//! Structured query assembly
//!
//! This module builds the request object an external search backend
//! executes: a tree of boolean query nodes plus pagination, sort and
//! highlighting. The compiler never executes queries and never validates
//! field names against an index schema; it only compiles the request.

pub mod builder;
pub mod nodes;
pub mod request;
pub mod sort;

pub use builder::{
    build_private_search_query, build_query, build_query_string, AccessContext,
};
pub use nodes::{BoolQuery, MatchQuery, QueryNode, QueryStringQuery, TermQuery, TermValue, TermsQuery};
pub use request::{Highlight, HighlightField, SearchRequest};
pub use sort::{resolve_sort, SortKey, SortOrder};
