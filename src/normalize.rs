//! Unicode normalization for query text
//!
//! Canonicalizes arbitrary text to NFKD (canonical decomposition followed by
//! compatibility mapping). When multilingual search is disabled the result is
//! additionally folded to an ASCII-only approximation by dropping every
//! non-ASCII character from the decomposed stream. The fold is lossy by
//! design: an accented letter decomposes into its base letter plus combining
//! marks, so folding keeps the base letter and discards the marks.

use unicode_normalization::UnicodeNormalization;

/// Normalize text to NFKD, optionally folding to ASCII
///
/// Pure and total: never fails, for any valid Unicode input.
pub fn normalize(text: &str, fold_ascii: bool) -> String {
    if fold_ascii {
        text.nfkd().filter(char::is_ascii).collect()
    } else {
        text.nfkd().collect()
    }
}

/// Normalize optional text; absence propagates
pub fn normalize_opt(text: Option<&str>, fold_ascii: bool) -> Option<String> {
    text.map(|t| normalize(t, fold_ascii))
}

/// Replace splitter punctuation (`_`, `-`, `.`) with spaces
///
/// Produces the analyzer-friendly variant of a name for indexing. Returns an
/// empty string when the text contains no splitters, so callers can skip
/// indexing a redundant variant.
pub fn clean_splitters(text: &str, fold_ascii: bool) -> String {
    let cleaned = text.replace(['_', '-', '.'], " ");
    if cleaned == text {
        return String::new();
    }
    normalize(&cleaned, fold_ascii)
}
