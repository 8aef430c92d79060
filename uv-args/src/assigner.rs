//! Grouping of tokens into name/value pairs.
//!
//! This handles the patterns:
//! - Named args: `-name value` (any number of leading dashes)
//! - Flags: `-flag`, or `-flag true` when followed by a boolean
//! - Positional args: anything not starting with `-`

use std::collections::HashSet;

use tracing::trace;

use crate::convert::can_convert;
use crate::error::ParseError;
use crate::schema::ArgType;

/// A name/value pair produced from the token stream.
///
/// `name` is `None` for a positional value that still has to be bound to a
/// schema slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPair {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl ParsedPair {
    pub fn named(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            name: None,
            value: Some(value.into()),
        }
    }
}

/// A token names an argument iff it starts with a dash
pub(crate) fn is_name(token: &str) -> bool {
    token.starts_with('-')
}

/// Strip the leading dashes of a name token
pub(crate) fn to_name(token: &str) -> &str {
    token.trim_start_matches('-')
}

/// Group tokens into pairs, left to right.
///
/// # Arguments
/// * `tokens` - Tokens produced by the lexer
/// * `flags` - Names of arguments that don't require a value
///
/// # Returns
/// * Pairs in input order
pub fn assign_tokens(tokens: &[String], flags: &HashSet<String>) -> Vec<ParsedPair> {
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let next = tokens.get(i + 1).filter(|t| !is_name(t));

        let pair = if is_name(token) {
            let name = to_name(token);

            let value = if flags.contains(name) {
                // A flag only takes the next token when it reads as a boolean;
                // anything else is left for the next round as a positional
                next.filter(|t| can_convert(t, ArgType::Bool))
            } else {
                next
            };

            ParsedPair::named(name, value.cloned())
        } else {
            ParsedPair::positional(token.as_str())
        };

        i += if pair.name.is_some() && pair.value.is_some() { 2 } else { 1 };
        trace!("Assigned token pair {:?} = {:?}", pair.name, pair.value);
        pairs.push(pair);
    }

    pairs
}

/// Check assigned pairs for structural errors.
///
/// Every pair sequence is currently accepted.
pub fn assign_errors(_pairs: &[ParsedPair]) -> Vec<ParseError> {
    Vec::new()
}
