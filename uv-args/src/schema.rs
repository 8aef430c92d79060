//! Argument declarations and schema sanitizing.
//!
//! A schema is the ordered list of arguments a command expects. Callers
//! declare arguments with [`ArgumentSpec`], possibly leaving positional ones
//! unnamed; [`Schema::sanitize`] gives every declaration a name so the later
//! stages can work purely in terms of names.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Semantic type an argument value is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgType {
    #[default]
    String,
    Bool,
    Integer,
    Decimal,
    Float,
    StringList,
    Date,
    DateTime,
    Duration,
}

impl ArgType {
    /// Name used in diagnostics and schema files
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Bool => "bool",
            ArgType::Integer => "integer",
            ArgType::Decimal => "decimal",
            ArgType::Float => "float",
            ArgType::StringList => "string_list",
            ArgType::Date => "date",
            ArgType::DateTime => "date_time",
            ArgType::Duration => "duration",
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied argument declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Name of the argument; unnamed arguments get a positional name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type the value is converted to
    #[serde(rename = "type", default)]
    pub arg_type: ArgType,

    /// Whether the argument may be left out
    #[serde(rename = "optional", default)]
    pub is_optional: bool,
}

impl ArgumentSpec {
    /// A named argument that must be supplied
    pub fn required(name: impl Into<String>, arg_type: ArgType) -> Self {
        Self {
            name: Some(name.into()),
            arg_type,
            is_optional: false,
        }
    }

    /// A named argument that may be left out
    pub fn optional(name: impl Into<String>, arg_type: ArgType) -> Self {
        Self {
            name: Some(name.into()),
            arg_type,
            is_optional: true,
        }
    }

    /// An optional boolean switch, `true` when present without a value
    pub fn flag(name: impl Into<String>) -> Self {
        Self::optional(name, ArgType::Bool)
    }

    /// An unnamed argument, bound by position
    pub fn positional(arg_type: ArgType, is_optional: bool) -> Self {
        Self {
            name: None,
            arg_type,
            is_optional,
        }
    }
}

impl fmt::Display for ArgumentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_declaration(f, self.name.as_deref(), self.arg_type, self.is_optional)
    }
}

/// An argument declaration after sanitizing; always named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredArg {
    pub name: String,
    pub arg_type: ArgType,
    pub is_optional: bool,
}

impl DeclaredArg {
    /// Flags are optional booleans and may appear without a value.
    pub fn is_flag(&self) -> bool {
        self.is_optional && self.arg_type == ArgType::Bool
    }
}

impl fmt::Display for DeclaredArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_declaration(f, Some(self.name.as_str()), self.arg_type, self.is_optional)
    }
}

fn write_declaration(
    f: &mut fmt::Formatter<'_>,
    name: Option<&str>,
    arg_type: ArgType,
    is_optional: bool,
) -> fmt::Result {
    match name {
        Some(name) => write!(f, "{} {}", name, arg_type)?,
        None => write!(f, "{}", arg_type)?,
    }
    if is_optional {
        f.write_str("*")?;
    }
    Ok(())
}

/// The sanitized, ordered list of expected arguments.
///
/// An empty schema switches the parser into schema-less mode, where every
/// validation step is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    args: Vec<DeclaredArg>,
}

impl Schema {
    /// Normalize caller declarations.
    ///
    /// A missing list becomes an empty schema. Unnamed declarations are named
    /// `"0"`, `"1"`, ... in declaration order; named ones pass through.
    pub fn sanitize(specs: Option<&[ArgumentSpec]>) -> Self {
        let Some(specs) = specs else {
            return Self::default();
        };

        let mut next_positional = 0usize;
        let args: Vec<DeclaredArg> = specs
            .iter()
            .map(|spec| {
                let name = match &spec.name {
                    Some(name) => name.clone(),
                    None => {
                        let name = next_positional.to_string();
                        next_positional += 1;
                        name
                    }
                };
                DeclaredArg {
                    name,
                    arg_type: spec.arg_type,
                    is_optional: spec.is_optional,
                }
            })
            .collect();

        // Positional binding walks the schema in order, so a required
        // argument after an optional one may be bound unexpectedly.
        let mut seen_optional = false;
        for arg in &args {
            if arg.is_optional {
                seen_optional = true;
            } else if seen_optional {
                warn!(
                    "Required argument '{}' is declared after an optional argument; positional binding may be unexpected",
                    arg.name
                );
            }
        }

        Self { args }
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn args(&self) -> &[DeclaredArg] {
        &self.args
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeclaredArg> {
        self.args.iter()
    }

    /// Find the first declaration with the given name
    pub fn find(&self, name: &str) -> Option<&DeclaredArg> {
        self.args.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Names of the arguments that may appear without a value
    pub fn flag_names(&self) -> HashSet<String> {
        self.args
            .iter()
            .filter(|a| a.is_flag())
            .map(|a| a.name.clone())
            .collect()
    }
}
