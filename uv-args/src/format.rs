//! Diagnostic formatting for values and parse results.
//!
//! The print forms here are used in error messages, logs and the plain
//! output of the shell. They never influence parsing.

use std::fmt;

use chrono::Duration;

use crate::value::{ArgValue, ParsedArgs};

/// Join displayable items with a separator
pub(crate) fn join<T: fmt::Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Print a duration as `[d.]hh:mm:ss`
pub(crate) fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{}{}.{:02}:{:02}:{:02}", sign, days, hours, minutes, seconds)
    } else {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Null => Ok(()),
            ArgValue::Bool(b) => write!(f, "{}", b),
            ArgValue::String(s) => f.write_str(s),
            ArgValue::Integer(i) => write!(f, "{}", i),
            ArgValue::Decimal(d) => write!(f, "{}", d.normalize()),
            ArgValue::Float(x) => write!(f, "{}", x),
            ArgValue::List(items) => write!(f, "({})", items.join(",")),
            ArgValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            ArgValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            ArgValue::Duration(d) => f.write_str(&format_duration(d)),
        }
    }
}

/// Prints as `([name,value],[name,value])`, names in sorted order.
impl fmt::Display for ParsedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(name, value)| format!("[{},{}]", name, value))
            .collect();
        write!(f, "({})", entries.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, ParseFailure, Stage};
    use crate::schema::{ArgType, DeclaredArg};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn mapping_prints_sorted_pairs() {
        let mut args = ParsedArgs::new();
        args.insert("foo", ArgValue::Integer(1));
        args.insert("bar", ArgValue::Bool(true));
        assert_eq!(args.to_string(), "([bar,true],[foo,1])");
    }

    #[test]
    fn empty_mapping_prints_empty_parens() {
        assert_eq!(ParsedArgs::new().to_string(), "()");
    }

    #[test]
    fn values_print_compactly() {
        assert_eq!(ArgValue::Null.to_string(), "");
        assert_eq!(ArgValue::Decimal(Decimal::from_str("2.500").unwrap()).to_string(), "2.5");
        assert_eq!(ArgValue::List(vec!["a,b".into(), "c".into()]).to_string(), "(a,b,c)");
    }

    #[test]
    fn durations_print_with_optional_days() {
        assert_eq!(format_duration(&Duration::seconds(90)), "00:01:30");
        assert_eq!(format_duration(&Duration::seconds(93_784)), "1.02:03:04");
        assert_eq!(format_duration(&Duration::seconds(-60)), "-00:01:00");
    }

    #[test]
    fn failure_message_lists_every_error() {
        let arg = DeclaredArg {
            name: "a".to_string(),
            arg_type: ArgType::Integer,
            is_optional: false,
        };
        let failure = ParseFailure::new(
            Stage::Convert,
            vec![ParseError::type_mismatch(&arg, ArgValue::String("abc".into()))],
        );
        assert_eq!(
            failure.to_string(),
            "1 error(s) during type conversion: Type mismatch: a (expected integer, got 'abc')"
        );
    }
}
