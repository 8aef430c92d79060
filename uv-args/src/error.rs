//! Error types for command argument parsing.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::DeclaredArg;
use crate::value::ArgValue;

/// What went wrong with a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseErrorKind {
    /// A required argument was never supplied
    MissingRequiredArgument,

    /// An argument was supplied that the schema does not declare
    UnexpectedArgument,

    /// A value could not be converted to the declared type
    TypeMismatch,

    /// A required argument was named but given no value
    MissingRequiredValue,

    /// Reserved for lexical errors; never produced by the current lexer
    LexError,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParseErrorKind::MissingRequiredArgument => "Missing required argument",
            ParseErrorKind::UnexpectedArgument => "Unexpected argument",
            ParseErrorKind::TypeMismatch => "Type mismatch",
            ParseErrorKind::MissingRequiredValue => "Missing required value",
            ParseErrorKind::LexError => "Lexical error",
        };
        f.write_str(text)
    }
}

/// A structured error for one argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,

    /// The declaration involved, when the argument is declared
    pub argument: Option<DeclaredArg>,

    /// Name of the argument as supplied or assigned
    pub name: String,

    /// The offending value, if there was one
    pub value: Option<ArgValue>,
}

impl ParseError {
    pub fn missing_argument(argument: &DeclaredArg) -> Self {
        Self {
            kind: ParseErrorKind::MissingRequiredArgument,
            argument: Some(argument.clone()),
            name: argument.name.clone(),
            value: None,
        }
    }

    pub fn unexpected_argument(name: &str, value: Option<&str>) -> Self {
        Self {
            kind: ParseErrorKind::UnexpectedArgument,
            argument: None,
            name: name.to_string(),
            value: value.map(|v| ArgValue::String(v.to_string())),
        }
    }

    pub fn type_mismatch(argument: &DeclaredArg, value: ArgValue) -> Self {
        Self {
            kind: ParseErrorKind::TypeMismatch,
            argument: Some(argument.clone()),
            name: argument.name.clone(),
            value: Some(value),
        }
    }

    pub fn missing_value(argument: &DeclaredArg) -> Self {
        Self {
            kind: ParseErrorKind::MissingRequiredValue,
            argument: Some(argument.clone()),
            name: argument.name.clone(),
            value: None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.name)?;
        match (self.kind, &self.argument, &self.value) {
            (ParseErrorKind::TypeMismatch, Some(arg), Some(value)) => {
                write!(f, " (expected {}, got '{}')", arg.arg_type, value)
            }
            (ParseErrorKind::UnexpectedArgument, _, Some(value)) => write!(f, " = '{}'", value),
            (_, Some(arg), _) => write!(f, " ({})", arg),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for ParseError {}

/// Pipeline stage that produced a batch of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Lex,
    Assign,
    Bind,
    Convert,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Stage::Lex => "lexing",
            Stage::Assign => "token assignment",
            Stage::Bind => "schema binding",
            Stage::Convert => "type conversion",
        };
        f.write_str(text)
    }
}

/// The errors of the first pipeline stage that failed.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{} error(s) during {stage}: {}", .errors.len(), crate::format::join(.errors, "; "))]
pub struct ParseFailure {
    pub stage: Stage,
    pub errors: Vec<ParseError>,
}

impl ParseFailure {
    pub fn new(stage: Stage, errors: Vec<ParseError>) -> Self {
        Self { stage, errors }
    }

    /// Kinds of all errors, in order
    pub fn kinds(&self) -> Vec<ParseErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }
}

/// Errors raised while loading a command schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML schema: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported schema format: {0}")]
    UnsupportedFormat(String),

    #[error("Argument '{0}' is declared more than once")]
    DuplicateArgument(String),
}
