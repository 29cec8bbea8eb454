//! Escaping and quoting for the backend query grammar
//!
//! The backend splits bare tokens containing reserved punctuation into
//! multiple boolean clauses, so tokens that are not plain words are wrapped
//! in quotes rather than escaped character by character. Quoting has to
//! happen before any wildcard suffix is attached: `"abc"*` parses as a
//! phrase OR a match-all, which is not the same thing as `"abc*"`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Keywords of the target grammar, passed through verbatim
const KEYWORDS: [&str; 6] = ["AND", "OR", "NOT", "&&", "||", "!"];

/// Characters with syntactic meaning in the target grammar
static RESERVED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[+\-=&|!(){}\[\]^"~*?:\\/]"#).expect("reserved char pattern"));

/// Tokens of ASCII word characters plus wildcards are safe unquoted.
/// Deliberately ASCII: the backend's analyzer decomposes multibyte runs into
/// OR-ed single characters unless they are quoted.
static BARE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[0-9A-Za-z_*?]+\z").expect("bare token pattern"));

/// Supported token shape: optional `+`/`-` prefix, a body of escaped pairs
/// or anything except `\`, `~`, `^`, and an optional `~`/`^` numeric suffix.
static TOKEN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(?P<prefix_op>[+-])?(?P<body>(?:\\.|[^\\~^])+)?(?P<suffix_op>[~^][0-9.]*)?\z")
        .expect("token shape pattern")
});

/// Backslash-escape every reserved character in `text`
///
/// `<` and `>` have no escape form in the target grammar at all. The only way
/// to stop them from forming a range expression is to remove them entirely.
pub fn escape_reserved(text: &str) -> String {
    let escaped = RESERVED.replace_all(text, |caps: &Captures| format!("\\{}", &caps[0]));
    escaped.replace(['<', '>'], "")
}

/// Quote a token unless it is safe bare
pub(crate) fn quote(token: &str) -> String {
    if BARE_TOKEN.is_match(token) {
        token.to_string()
    } else {
        format!("\"{}\"", token)
    }
}

/// Quote a closed token for the target grammar
///
/// Keywords pass through verbatim. Tokens that do not match the supported
/// shape also pass through literally: unparseable input is compiled
/// best-effort, never rejected. For matching tokens the body is split on an
/// un-escaped `:`; the key side stays bare, only the value side is quoted.
pub(crate) fn quote_token(token: &str) -> String {
    if KEYWORDS.contains(&token) {
        return token.to_string();
    }

    let Some(caps) = TOKEN_SHAPE.captures(token) else {
        return token.to_string();
    };

    let mut res = String::new();

    if let Some(prefix_op) = caps.name("prefix_op") {
        res.push_str(prefix_op.as_str());
    }

    if let Some(body) = caps.name("body") {
        let parts = split_on_separator(body.as_str());
        if parts.iter().all(|part| part.as_str() != ":") {
            res.push_str(&quote(body.as_str()));
        } else {
            let mut has_key = false;
            for part in &parts {
                if part.is_empty() {
                    continue;
                }
                let is_separator = part.as_str() == ":";
                if is_separator || !has_key {
                    res.push_str(part);
                    if is_separator {
                        has_key = true;
                    }
                } else {
                    res.push_str(&quote(part));
                }
            }
        }
    }

    if let Some(suffix_op) = caps.name("suffix_op") {
        res.push_str(suffix_op.as_str());
    }

    res
}

/// Split a token body on un-escaped `:`, keeping separators as parts
fn split_on_separator(body: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_escape = false;

    for c in body.chars() {
        if in_escape {
            current.push(c);
            in_escape = false;
        } else if c == '\\' {
            current.push(c);
            in_escape = true;
        } else if c == ':' {
            parts.push(std::mem::take(&mut current));
            parts.push(":".to_string());
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape_reserved("a+b"), "a\\+b");
        assert_eq!(escape_reserved("(x:y)"), "\\(x\\:y\\)");
        assert_eq!(escape_reserved("path/to"), "path\\/to");
        assert_eq!(escape_reserved("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_escape_removes_angle_brackets() {
        assert_eq!(escape_reserved("a<b>c"), "abc");
        assert_eq!(escape_reserved("<<>>"), "");
    }

    #[test]
    fn test_escape_plain_text_untouched() {
        assert_eq!(escape_reserved("hello world"), "hello world");
    }

    #[test]
    fn test_quote_bare_tokens() {
        assert_eq!(quote("abc"), "abc");
        assert_eq!(quote("abc*"), "abc*");
        assert_eq!(quote("a_b?"), "a_b?");
        assert_eq!(quote("42"), "42");
    }

    #[test]
    fn test_quote_wraps_everything_else() {
        assert_eq!(quote("a.b"), "\"a.b\"");
        assert_eq!(quote("a b"), "\"a b\"");
        assert_eq!(quote(""), "\"\"");
        // Multibyte runs are not bare even though they are word characters
        assert_eq!(quote("\u{795e}\u{4fdd}\u{753a}"), "\"\u{795e}\u{4fdd}\u{753a}\"");
    }

    #[test]
    fn test_quote_token_keywords_verbatim() {
        for keyword in ["AND", "OR", "NOT", "&&", "||", "!"] {
            assert_eq!(quote_token(keyword), keyword);
        }
    }

    #[test]
    fn test_quote_token_plain_body() {
        assert_eq!(quote_token("abc"), "abc");
        assert_eq!(quote_token("a.b"), "\"a.b\"");
    }

    #[test]
    fn test_quote_token_prefix_and_suffix_ops() {
        assert_eq!(quote_token("+abc"), "+abc");
        assert_eq!(quote_token("-abc"), "-abc");
        assert_eq!(quote_token("abc~2"), "abc~2");
        assert_eq!(quote_token("abc^1.5"), "abc^1.5");
        assert_eq!(quote_token("+a.b~0.8"), "+\"a.b\"~0.8");
    }

    #[test]
    fn test_quote_token_key_value() {
        // Key and separator stay bare, only the value side is quoted
        assert_eq!(quote_token("title:abc"), "title:abc");
        assert_eq!(quote_token("title:a.b"), "title:\"a.b\"");
    }

    #[test]
    fn test_quote_token_escaped_separator_is_body() {
        // An escaped colon does not split the token into key:value
        assert_eq!(quote_token("a\\:b"), "\"a\\:b\"");
    }

    #[test]
    fn test_quote_token_unparseable_passthrough() {
        // `~` in the middle of a body does not match the token shape
        assert_eq!(quote_token("a~b"), "a~b");
    }

    #[test]
    fn test_split_on_separator() {
        assert_eq!(split_on_separator("abc"), vec!["abc"]);
        assert_eq!(split_on_separator("a:b"), vec!["a", ":", "b"]);
        assert_eq!(split_on_separator(":a"), vec!["", ":", "a"]);
        assert_eq!(split_on_separator("a:b:c"), vec!["a", ":", "b", ":", "c"]);
        assert_eq!(split_on_separator("a\\:b"), vec!["a\\:b"]);
    }
}
