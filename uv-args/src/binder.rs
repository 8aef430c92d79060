//! Binding of positional values to schema names, and schema validation.

use std::collections::HashSet;

use tracing::trace;

use crate::assigner::ParsedPair;
use crate::error::ParseError;
use crate::schema::Schema;

/// A pair whose name is known, either given explicitly or bound by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedPair {
    pub name: String,
    pub value: Option<String>,
}

impl AssignedPair {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Hands out names for positional values.
///
/// Declared names come first, in schema order; after that synthetic names
/// `"0"`, `"1"`, ... that no declared name uses. Names in `taken` are
/// never handed out.
struct NameSupply<'a> {
    declared: &'a Schema,
    taken: HashSet<&'a str>,
    next_declared: usize,
    next_synthetic: usize,
}

impl<'a> NameSupply<'a> {
    fn new(declared: &'a Schema, taken: HashSet<&'a str>) -> Self {
        Self {
            declared,
            taken,
            next_declared: 0,
            next_synthetic: 0,
        }
    }

    fn next_name(&mut self) -> String {
        while let Some(arg) = self.declared.args().get(self.next_declared) {
            self.next_declared += 1;
            if !self.taken.contains(arg.name.as_str()) {
                return arg.name.clone();
            }
        }

        loop {
            let candidate = self.next_synthetic.to_string();
            self.next_synthetic += 1;
            if !self.declared.contains(&candidate) && !self.taken.contains(candidate.as_str()) {
                return candidate;
            }
        }
    }
}

/// Give every positional pair a name.
///
/// Named pairs pass through unchanged. Positional values take the next
/// unused name from the schema, in declaration order, then synthetic
/// numeric names. A declared name given explicitly anywhere in the command
/// is not used for positional values.
pub fn bind(pairs: &[ParsedPair], schema: &Schema) -> Vec<AssignedPair> {
    let explicit: HashSet<&str> = pairs.iter().filter_map(|p| p.name.as_deref()).collect();
    let mut supply = NameSupply::new(schema, explicit);

    pairs
        .iter()
        .map(|pair| {
            let name = match &pair.name {
                Some(name) => name.clone(),
                None => {
                    let name = supply.next_name();
                    trace!("Bound positional value {:?} to '{}'", pair.value, name);
                    name
                }
            };
            AssignedPair::new(name, pair.value.clone())
        })
        .collect()
}

/// Validate bound pairs against the schema.
///
/// Reports each required argument that was never supplied, then each
/// distinct supplied name the schema does not declare. Nothing is checked
/// when the schema is empty.
pub fn binding_errors(assigned: &[AssignedPair], schema: &Schema) -> Vec<ParseError> {
    if schema.is_empty() {
        return Vec::new();
    }

    let supplied: HashSet<&str> = assigned.iter().map(|p| p.name.as_str()).collect();

    let mut errors: Vec<ParseError> = schema
        .iter()
        .filter(|arg| !arg.is_optional && !supplied.contains(arg.name.as_str()))
        .map(ParseError::missing_argument)
        .collect();

    let mut reported = HashSet::new();
    for pair in assigned {
        if !schema.contains(&pair.name) && reported.insert(pair.name.as_str()) {
            errors.push(ParseError::unexpected_argument(&pair.name, pair.value.as_deref()));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use crate::schema::{ArgType, ArgumentSpec};
    use crate::value::ArgValue;

    fn schema(specs: &[ArgumentSpec]) -> Schema {
        Schema::sanitize(Some(specs))
    }

    fn names(assigned: &[AssignedPair]) -> Vec<&str> {
        assigned.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn positional_values_follow_declaration_order() {
        let schema = schema(&[
            ArgumentSpec::required("src", ArgType::String),
            ArgumentSpec::required("dst", ArgType::String),
        ]);
        let pairs = vec![ParsedPair::positional("a"), ParsedPair::positional("b")];
        let assigned = bind(&pairs, &schema);
        assert_eq!(
            assigned,
            vec![
                AssignedPair::new("src", Some("a".into())),
                AssignedPair::new("dst", Some("b".into())),
            ]
        );
    }

    #[test]
    fn without_schema_positionals_are_numbered() {
        let pairs = vec![
            ParsedPair::positional("a"),
            ParsedPair::named("x", None),
            ParsedPair::positional("b"),
        ];
        let assigned = bind(&pairs, &Schema::default());
        assert_eq!(names(&assigned), vec!["0", "x", "1"]);
    }

    #[test]
    fn synthetic_names_skip_declared_names() {
        let schema = schema(&[ArgumentSpec::positional(ArgType::String, false)]);
        let pairs = vec![
            ParsedPair::positional("a"),
            ParsedPair::positional("b"),
            ParsedPair::positional("c"),
        ];
        let assigned = bind(&pairs, &schema);
        assert_eq!(names(&assigned), vec!["0", "1", "2"]);

        let schema = self::schema(&[
            ArgumentSpec::required("path", ArgType::String),
            ArgumentSpec::optional("0", ArgType::String),
        ]);
        let assigned = bind(&pairs, &schema);
        assert_eq!(names(&assigned), vec!["path", "0", "1"]);
    }

    #[test]
    fn explicitly_named_slots_are_skipped() {
        let schema = schema(&[
            ArgumentSpec::required("src", ArgType::String),
            ArgumentSpec::required("dst", ArgType::String),
        ]);
        let pairs = vec![
            ParsedPair::named("src", Some("a".into())),
            ParsedPair::positional("b"),
        ];
        let assigned = bind(&pairs, &schema);
        assert_eq!(names(&assigned), vec!["src", "dst"]);
    }

    #[test]
    fn slots_named_later_in_the_command_are_skipped() {
        let schema = schema(&[
            ArgumentSpec::required("src", ArgType::String),
            ArgumentSpec::required("dst", ArgType::String),
        ]);
        let pairs = vec![
            ParsedPair::positional("b"),
            ParsedPair::named("src", Some("a".into())),
        ];
        let assigned = bind(&pairs, &schema);
        assert_eq!(
            assigned,
            vec![
                AssignedPair::new("dst", Some("b".into())),
                AssignedPair::new("src", Some("a".into())),
            ]
        );
        assert!(binding_errors(&assigned, &schema).is_empty());
    }

    #[test]
    fn missing_required_arguments_are_reported_once_each() {
        let schema = schema(&[
            ArgumentSpec::required("a", ArgType::Integer),
            ArgumentSpec::required("b", ArgType::Integer),
            ArgumentSpec::optional("c", ArgType::Integer),
        ]);
        let errors = binding_errors(&[], &schema);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ParseErrorKind::MissingRequiredArgument));
        assert_eq!(errors[0].name, "a");
        assert_eq!(errors[1].name, "b");
        assert_eq!(errors[1].argument.as_ref().map(|a| a.name.as_str()), Some("b"));
    }

    #[test]
    fn unknown_names_are_reported_with_their_value() {
        let schema = schema(&[ArgumentSpec::optional("a", ArgType::String)]);
        let assigned = vec![
            AssignedPair::new("zzz", Some("1".into())),
            AssignedPair::new("zzz", Some("2".into())),
            AssignedPair::new("a", None),
        ];
        let errors = binding_errors(&assigned, &schema);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedArgument);
        assert_eq!(errors[0].name, "zzz");
        assert_eq!(errors[0].value, Some(ArgValue::String("1".into())));
        assert!(errors[0].argument.is_none());
    }

    #[test]
    fn empty_schema_skips_validation() {
        let assigned = vec![AssignedPair::new("anything", None)];
        assert!(binding_errors(&assigned, &Schema::default()).is_empty());
    }
}
