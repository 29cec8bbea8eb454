//! Query string compilation
//!
//! Turns a raw, user-typed search string into a string the backend's
//! `query_string` mini-language parser is guaranteed to accept:
//!
//! 1. Unicode normalization (NFKD, optionally folded to ASCII)
//! 2. Tokenization, escaping and quoting ([`compile_query_string`])
//! 3. Field-prefix rewriting to normalized fields ([`FieldNormalizer`])
//!
//! Malformed token shapes are never errors here: tokens that do not match
//! the supported grammar pass through literally. Search input is adversarial
//! and a best-effort compile beats rejecting the whole search.

mod escape;
mod fields;
mod scanner;

pub use escape::escape_reserved;
pub use fields::{FieldNormalizer, NORMALIZED_FIELDS};
pub use scanner::compile_query_string;

use tracing::debug;

use crate::config::SearchConfig;
use crate::normalize::normalize;

/// Compile a raw query string end to end
///
/// Normalizes, escapes/quotes and rewrites known field prefixes. ASCII
/// folding is applied only when multilingual search is disabled.
pub fn convert_query_string(raw: &str, config: &SearchConfig) -> String {
    let text = normalize(raw, !config.enable_multilingual_search);
    let qs = compile_query_string(&text);
    let qs = FieldNormalizer::shared().apply(&qs);
    debug!(query = %qs, "compiled query string");
    qs
}
