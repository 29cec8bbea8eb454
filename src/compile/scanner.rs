//! Character-level scanner for raw query strings
//!
//! A single left-to-right pass over the input that splits it into tokens and
//! quoted spans, then flushes every closed token through the quoting rules in
//! [`super::escape`]. Spans the user quoted explicitly pass through
//! unmodified.
//!
//! The scan is an explicit finite-state machine. `Escape` is a one-character
//! sub-state that appends the next character verbatim and re-enters the state
//! that invoked it.

use super::escape::quote_token;

const QUOTE: char = '"';

/// Scanner state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Between tokens
    Normal,
    /// Accumulating an unquoted token
    Token,
    /// Inside a quoted span
    Quote,
    /// One character after a backslash
    Escape(Resume),
}

/// State an escape returns to once its character is consumed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resume {
    Token,
    Quote,
}

/// Token boundaries: whitespace and grouping parentheses
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

/// Compile a raw query string into a grammar-safe query string
///
/// Delimiters and user-quoted spans are copied through as-is; every other
/// token is closed at a delimiter (or end of input) and passed through the
/// token quoting rules.
pub fn compile_query_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    let mut token = String::new();
    let mut state = State::Normal;

    for c in raw.chars() {
        state = match state {
            State::Escape(resume) => {
                token.push(c);
                match resume {
                    Resume::Token => State::Token,
                    Resume::Quote => State::Quote,
                }
            }
            State::Quote => {
                token.push(c);
                if c == '\\' {
                    State::Escape(Resume::Quote)
                } else if c == QUOTE {
                    // Closed quoted span: passes through unmodified
                    out.push_str(&token);
                    token.clear();
                    State::Normal
                } else {
                    State::Quote
                }
            }
            State::Normal | State::Token => {
                if c == '\\' {
                    token.push(c);
                    State::Escape(Resume::Token)
                } else if c == QUOTE || is_delimiter(c) {
                    if state == State::Token {
                        out.push_str(&quote_token(&token));
                        token.clear();
                    }
                    if c == QUOTE {
                        token.push(c);
                        State::Quote
                    } else {
                        out.push(c);
                        State::Normal
                    }
                } else if c == '<' || c == '>' {
                    // Un-escapable in the target grammar: dropped outright so
                    // they can never form a range expression
                    state
                } else {
                    token.push(c);
                    State::Token
                }
            }
        };
    }

    if !token.is_empty() {
        out.push_str(&quote_token(&token));
    }

    out
}
