//! Type conversion of bound argument values.
//!
//! Values are coerced to the type their declaration asks for through the
//! coercion table in [`coerce`]. Flags and string lists get special
//! handling; validation afterwards reports values that could not be
//! converted and required arguments left without a value.

mod coerce;

pub use coerce::{can_convert, convert, split_list, CoercionError};

use tracing::trace;

use crate::binder::AssignedPair;
use crate::error::ParseError;
use crate::schema::{ArgType, Schema};
use crate::value::ArgValue;

/// An argument with its converted value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedArgument {
    pub name: String,
    pub value: ArgValue,
}

/// Convert every bound pair to its declared type.
///
/// Arguments the schema doesn't know are treated as optional strings. A
/// value that fails to convert is kept as the raw string so that
/// [`conversion_errors`] can report it.
pub fn convert_args(assigned: &[AssignedPair], schema: &Schema) -> Vec<ConvertedArgument> {
    assigned
        .iter()
        .map(|pair| {
            let declared = schema.find(&pair.name);
            let arg_type = declared.map(|a| a.arg_type).unwrap_or(ArgType::String);
            let is_optional = declared.map(|a| a.is_optional).unwrap_or(true);

            let value = match pair.value.as_deref() {
                Some(raw) if arg_type == ArgType::StringList => ArgValue::List(split_list(raw)),
                // Present without a value: an optional boolean, or anything
                // undeclared, counts as a set flag
                None if (is_optional && arg_type == ArgType::Bool) || declared.is_none() => {
                    ArgValue::Bool(true)
                }
                None => ArgValue::Null,
                Some(raw) => {
                    convert(raw, arg_type).unwrap_or_else(|_| ArgValue::String(raw.to_string()))
                }
            };

            trace!("Converted '{}' to {:?}", pair.name, value);
            ConvertedArgument {
                name: pair.name.clone(),
                value,
            }
        })
        .collect()
}

/// Validate converted values against their declarations.
///
/// Nothing is checked when the schema is empty.
pub fn conversion_errors(converted: &[ConvertedArgument], schema: &Schema) -> Vec<ParseError> {
    if schema.is_empty() {
        return Vec::new();
    }

    let mut errors = Vec::new();
    for argument in converted {
        // Undeclared names were already rejected during binding
        let Some(declared) = schema.find(&argument.name) else {
            continue;
        };

        if !argument.value.is_assignable_to(declared.arg_type) {
            errors.push(ParseError::type_mismatch(declared, argument.value.clone()));
        }

        if !declared.is_optional && argument.value.is_null() {
            errors.push(ParseError::missing_value(declared));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use crate::schema::ArgumentSpec;

    fn pair(name: &str, value: Option<&str>) -> AssignedPair {
        AssignedPair::new(name, value.map(str::to_string))
    }

    fn schema(specs: &[ArgumentSpec]) -> Schema {
        Schema::sanitize(Some(specs))
    }

    #[test]
    fn optional_bool_without_value_is_true() {
        let schema = schema(&[ArgumentSpec::flag("v")]);
        let converted = convert_args(&[pair("v", None)], &schema);
        assert_eq!(converted[0].value, ArgValue::Bool(true));
    }

    #[test]
    fn explicit_boolean_value_is_converted() {
        let schema = schema(&[ArgumentSpec::flag("v")]);
        let converted = convert_args(&[pair("v", Some("false"))], &schema);
        assert_eq!(converted[0].value, ArgValue::Bool(false));
    }

    #[test]
    fn undeclared_name_without_value_is_a_flag() {
        let converted = convert_args(&[pair("quiet", None)], &Schema::default());
        assert_eq!(converted[0].value, ArgValue::Bool(true));
    }

    #[test]
    fn undeclared_value_stays_a_string() {
        let converted = convert_args(&[pair("0", Some("12"))], &Schema::default());
        assert_eq!(converted[0].value, ArgValue::String("12".into()));
    }

    #[test]
    fn declared_argument_without_value_is_null() {
        let schema = schema(&[
            ArgumentSpec::required("name", ArgType::String),
            ArgumentSpec::required("force", ArgType::Bool),
        ]);
        let converted = convert_args(&[pair("name", None), pair("force", None)], &schema);
        assert_eq!(converted[0].value, ArgValue::Null);
        assert_eq!(converted[1].value, ArgValue::Null);

        let errors = conversion_errors(&converted, &schema);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ParseErrorKind::MissingRequiredValue));
    }

    #[test]
    fn string_list_splits_quoted_segments() {
        let schema = schema(&[ArgumentSpec::required("items", ArgType::StringList)]);
        let converted = convert_args(&[pair("items", Some(r#""a,b","c""#))], &schema);
        assert_eq!(
            converted[0].value,
            ArgValue::List(vec!["a,b".to_string(), "c".to_string()])
        );
        assert!(conversion_errors(&converted, &schema).is_empty());
    }

    #[test]
    fn unconvertible_value_is_a_type_mismatch() {
        let schema = schema(&[ArgumentSpec::required("a", ArgType::Integer)]);
        let converted = convert_args(&[pair("a", Some("abc"))], &schema);
        assert_eq!(converted[0].value, ArgValue::String("abc".into()));

        let errors = conversion_errors(&converted, &schema);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ParseErrorKind::TypeMismatch);
        assert_eq!(errors[0].value, Some(ArgValue::String("abc".into())));
        assert_eq!(errors[0].argument.as_ref().map(|a| a.arg_type), Some(ArgType::Integer));
    }

    #[test]
    fn optional_argument_may_be_null() {
        let schema = schema(&[ArgumentSpec::optional("limit", ArgType::Integer)]);
        let converted = convert_args(&[pair("limit", None)], &schema);
        assert_eq!(converted[0].value, ArgValue::Null);
        assert!(conversion_errors(&converted, &schema).is_empty());
    }

    #[test]
    fn empty_schema_skips_validation() {
        let converted = vec![ConvertedArgument {
            name: "x".into(),
            value: ArgValue::Null,
        }];
        assert!(conversion_errors(&converted, &Schema::default()).is_empty());
    }
}
