//! Parsing pipeline that ties the stages together.
//!
//! The stages run in order: lex, assign tokens to names, bind to the
//! schema, convert types. After each stage its errors are checked; the first
//! stage with errors ends the parse and only its errors are returned.

use tracing::debug;

use crate::assigner::{assign_errors, assign_tokens};
use crate::binder::{bind, binding_errors};
use crate::convert::{conversion_errors, convert_args};
use crate::error::{ParseError, ParseFailure, Stage};
use crate::lexer::{lex, lex_errors};
use crate::schema::{ArgumentSpec, Schema};
use crate::value::ParsedArgs;

/// Parse command text against an optional list of expected arguments.
///
/// Without expected arguments every value is accepted and positional values
/// are keyed `"0"`, `"1"`, ...
///
/// # Example
///
/// ```
/// use uv_args::{parse, ArgType, ArgumentSpec};
///
/// let expected = [
///     ArgumentSpec::required("path", ArgType::String),
///     ArgumentSpec::flag("force"),
/// ];
/// let args = parse("/tmp/out -force", Some(&expected[..])).unwrap();
/// assert_eq!(args.get_str("path"), Some("/tmp/out"));
/// assert!(args.is_set("force"));
/// ```
pub fn parse(
    command_text: &str,
    expected_args: Option<&[ArgumentSpec]>,
) -> Result<ParsedArgs, ParseFailure> {
    CommandParser::new(expected_args).parse(command_text)
}

/// A parser bound to one command's schema.
///
/// The schema is sanitized once; the parser holds no other state and can be
/// shared between threads.
#[derive(Debug, Clone, Default)]
pub struct CommandParser {
    schema: Schema,
}

impl CommandParser {
    /// Create a parser for the given expected arguments
    pub fn new(expected_args: Option<&[ArgumentSpec]>) -> Self {
        Self {
            schema: Schema::sanitize(expected_args),
        }
    }

    /// Create a parser that accepts any input
    pub fn schema_less() -> Self {
        Self::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parse one line of command text
    pub fn parse(&self, command_text: &str) -> Result<ParsedArgs, ParseFailure> {
        let tokens = lex(command_text);
        check(Stage::Lex, lex_errors(&tokens))?;
        debug!("Lexed {} token(s)", tokens.len());

        let flags = self.schema.flag_names();
        let pairs = assign_tokens(&tokens, &flags);
        check(Stage::Assign, assign_errors(&pairs))?;

        let assigned = bind(&pairs, &self.schema);
        check(Stage::Bind, binding_errors(&assigned, &self.schema))?;

        let converted = convert_args(&assigned, &self.schema);
        check(Stage::Convert, conversion_errors(&converted, &self.schema))?;

        let mut result = ParsedArgs::new();
        for argument in converted {
            if result.insert(argument.name.clone(), argument.value).is_some() {
                debug!("Argument '{}' given more than once; keeping the last value", argument.name);
            }
        }

        debug!("Parsed {} argument(s)", result.len());
        Ok(result)
    }
}

fn check(stage: Stage, errors: Vec<ParseError>) -> Result<(), ParseFailure> {
    if errors.is_empty() {
        return Ok(());
    }

    debug!("{} error(s) during {}", errors.len(), stage);
    Err(ParseFailure::new(stage, errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use crate::schema::ArgType;
    use crate::value::ArgValue;

    #[test]
    fn binding_errors_stop_before_conversion() {
        // "x" would also fail integer conversion, but binding fails first
        let expected = [
            ArgumentSpec::required("a", ArgType::Integer),
            ArgumentSpec::required("b", ArgType::Integer),
        ];
        let failure = parse("-a x", Some(&expected[..])).unwrap_err();
        assert_eq!(failure.stage, Stage::Bind);
        assert_eq!(failure.kinds(), vec![ParseErrorKind::MissingRequiredArgument]);
        assert_eq!(failure.errors[0].name, "b");
    }

    #[test]
    fn binding_reports_missing_and_unexpected_together() {
        let expected = [ArgumentSpec::required("a", ArgType::String)];
        let failure = parse("-b 1", Some(&expected[..])).unwrap_err();
        assert_eq!(
            failure.kinds(),
            vec![
                ParseErrorKind::MissingRequiredArgument,
                ParseErrorKind::UnexpectedArgument,
            ]
        );
    }

    #[test]
    fn repeated_name_keeps_last_value() {
        let args = parse("-tag a -tag b", None).unwrap();
        assert_eq!(args.get_str("tag"), Some("b"));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn parser_is_reusable() {
        let parser = CommandParser::new(Some(&[ArgumentSpec::required("n", ArgType::Integer)][..]));
        assert_eq!(parser.parse("1").unwrap().get_int("n"), Some(1));
        assert_eq!(parser.parse("2").unwrap().get("n"), Some(&ArgValue::Integer(2)));
        assert_eq!(parser.schema().len(), 1);
    }

    #[test]
    fn schema_less_parser_accepts_anything() {
        let parser = CommandParser::schema_less();
        let args = parser.parse("a -b -c 3").unwrap();
        assert_eq!(args.get_str("0"), Some("a"));
        assert!(args.is_set("b"));
        assert_eq!(args.get_str("c"), Some("3"));
    }
}
