//! Tokenizer for command text.
//!
//! Command text is split on whitespace. A double-quoted run is kept as a
//! single token with the quotes removed, so `-f "bar baz"` lexes to
//! `-f` and `bar baz`. There is no escaping and quotes do not nest.

use crate::error::ParseError;

/// Split command text into tokens
pub fn lex(text: &str) -> Vec<String> {
    split_quoted(text, char::is_whitespace)
}

/// Check a token sequence for lexical errors.
///
/// Every token sequence is currently accepted.
pub fn lex_errors(_tokens: &[String]) -> Vec<ParseError> {
    Vec::new()
}

/// Split `text` on characters matching `is_separator`, keeping quoted spans
/// together.
///
/// At each step separators are skipped. If the next character opens a quote
/// that is closed later on, the token runs through the closing quote;
/// otherwise it runs up to the next separator. Surrounding quotes are then
/// trimmed from the token.
pub(crate) fn split_quoted<F>(text: &str, is_separator: F) -> Vec<String>
where
    F: Fn(char) -> bool,
{
    let mut tokens = Vec::new();
    let mut rest = text;

    loop {
        rest = rest.trim_start_matches(|c: char| is_separator(c));
        if rest.is_empty() {
            break;
        }

        let end = match quoted_span_end(rest) {
            Some(end) => end,
            None => rest.find(|c: char| is_separator(c)).unwrap_or(rest.len()),
        };

        let (token, tail) = rest.split_at(end);
        tokens.push(token.trim_matches('"').to_string());
        rest = tail;
    }

    tokens
}

/// Byte offset just past the closing quote, if `text` starts a closed span
fn quoted_span_end(text: &str) -> Option<usize> {
    let inner = text.strip_prefix('"')?;
    inner.find('"').map(|close| close + 2)
}
