//! Command schemas stored as JSON or TOML documents.
//!
//! ```toml
//! name = "deploy"
//! description = "Deploy a stack"
//!
//! [[args]]
//! name = "stack"
//!
//! [[args]]
//! name = "regions"
//! type = "string_list"
//! optional = true
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::parser::CommandParser;
use crate::schema::ArgumentSpec;

/// A named command and the arguments it expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSchema {
    /// Name of the command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// What the command does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Expected arguments, in positional order
    #[serde(default)]
    pub args: Vec<ArgumentSpec>,
}

impl CommandSchema {
    pub fn from_json_str(content: &str) -> Result<Self, SchemaError> {
        let schema: CommandSchema = serde_json::from_str(content)?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SchemaError> {
        let schema: CommandSchema = toml::from_str(content)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Load a schema file, choosing the format from its extension
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(SchemaError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Build a parser for this schema
    pub fn parser(&self) -> CommandParser {
        CommandParser::new(Some(self.args.as_slice()))
    }

    /// Reject declarations that reuse a name
    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for name in self.args.iter().filter_map(|a| a.name.as_deref()) {
            if !seen.insert(name) {
                return Err(SchemaError::DuplicateArgument(name.to_string()));
            }
        }
        Ok(())
    }
}
