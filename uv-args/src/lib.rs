//! Schema-driven command argument parsing for Ultraviolet shells.
//!
//! This crate turns a single line of REPL input such as
//! `deploy -region eu-west-1 -force "my stack"` into a typed mapping of
//! argument names to values, guided by a declarative list of expected
//! arguments. Parsing runs as a pipeline of small stages (lexing, token
//! assignment, schema binding and type conversion); the first stage that
//! reports errors stops the pipeline and its errors are returned as a batch.

mod error;
mod format;
mod lexer;
mod assigner;
mod binder;
mod parser;
mod schema;
mod schema_file;
mod value;
pub mod convert;

// Re-export core types
pub use error::{ParseError, ParseErrorKind, ParseFailure, SchemaError, Stage};
pub use lexer::{lex, lex_errors};
pub use assigner::{assign_errors, assign_tokens, ParsedPair};
pub use binder::{bind, binding_errors, AssignedPair};
pub use convert::{conversion_errors, convert_args, ConvertedArgument};
pub use parser::{parse, CommandParser};
pub use schema::{ArgType, ArgumentSpec, DeclaredArg, Schema};
pub use schema_file::CommandSchema;
pub use value::{ArgValue, ParsedArgs};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
