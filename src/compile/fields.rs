//! Field-prefix rewriting
//!
//! Known field prefixes in a compiled query string are rewritten to their
//! normalized-field counterparts (`title:` -> `normalized_title:`) so they hit
//! the Unicode-normalized copies the index keeps for those fields. A prefix
//! is only rewritten at the start of the string or right after whitespace or
//! `(`, never mid-token.
//!
//! Known limitation, carried forward as documented behavior: the substitution
//! is boundary-aware only with respect to preceding context and does not
//! track quote state, so a field-name-shaped substring at a boundary inside a
//! quoted literal is rewritten too.

use regex::Regex;
use std::sync::LazyLock;

/// Fields with a normalized counterpart in the index
pub static NORMALIZED_FIELDS: [&str; 6] = ["user", "names", "title", "description", "name", "tags"];

/// Rewrites known field prefixes to their normalized-field counterparts
///
/// One substitution rule per field name, compiled once and applied
/// independently to the whole query string.
pub struct FieldNormalizer {
    rules: Vec<(Regex, String)>,
}

impl FieldNormalizer {
    /// Build a normalizer for the given field names
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = fields
            .into_iter()
            .map(|field| {
                let name = field.as_ref();
                let pattern = Regex::new(&format!(r"(^|[(\s]){}:", regex::escape(name)))
                    .expect("field prefix pattern");
                (pattern, format!("${{1}}normalized_{}:", name))
            })
            .collect();

        Self { rules }
    }

    /// The process-wide normalizer over [`NORMALIZED_FIELDS`]
    pub fn shared() -> &'static FieldNormalizer {
        static SHARED: LazyLock<FieldNormalizer> =
            LazyLock::new(|| FieldNormalizer::new(NORMALIZED_FIELDS));
        &SHARED
    }

    /// Rewrite every boundary occurrence of a known field prefix
    pub fn apply(&self, qs: &str) -> String {
        let mut qs = qs.to_string();
        for (pattern, replacement) in &self.rules {
            qs = pattern.replace_all(&qs, replacement.as_str()).into_owned();
        }
        qs
    }
}

impl Default for FieldNormalizer {
    fn default() -> Self {
        Self::new(NORMALIZED_FIELDS)
    }
}
