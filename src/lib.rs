pub mod compile;
pub mod config;
pub mod error;
pub mod normalize;
pub mod query;

pub use compile::{compile_query_string, convert_query_string, escape_reserved, FieldNormalizer};
pub use config::SearchConfig;
pub use error::{Result, SquallError};
pub use normalize::{clean_splitters, normalize, normalize_opt};
pub use query::{
    build_private_search_query, build_query, build_query_string, resolve_sort, AccessContext,
    QueryNode, SearchRequest,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
