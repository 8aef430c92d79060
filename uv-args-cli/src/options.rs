//! Command-line options for the uv-args shell.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use uv_args::{CommandParser, CommandSchema};

/// How parse results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `([name,value],...)` print form
    #[default]
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// Command-line arguments for the uv-args shell.
#[derive(Parser, Debug)]
#[command(author, version, about = "Parse commands against an argument schema")]
pub struct CliOptions {
    /// Schema file (.json or .toml); without one every input is accepted
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Output format for parsed arguments
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Parse a single command and exit
    #[arg(short, long, allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Enable debug logging of the parse stages
    #[arg(short, long)]
    pub debug: bool,
}

impl CliOptions {
    /// Load the configured schema, if any
    pub fn load_schema(&self) -> Result<Option<CommandSchema>> {
        self.schema
            .as_deref()
            .map(|path| {
                CommandSchema::load(path)
                    .with_context(|| format!("Failed to load schema from {}", path.display()))
            })
            .transpose()
    }

    /// Build the parser for the configured schema
    pub fn parser(&self) -> Result<CommandParser> {
        Ok(match self.load_schema()? {
            Some(schema) => schema.parser(),
            None => CommandParser::schema_less(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_plain_schema_less() {
        let opts = CliOptions::try_parse_from(["uv-args"]).unwrap();
        assert_eq!(opts.format, OutputFormat::Plain);
        assert!(opts.schema.is_none());
        assert!(!opts.debug);
        assert!(opts.parser().unwrap().schema().is_empty());
    }

    #[test]
    fn accepts_one_shot_command() {
        let opts = CliOptions::try_parse_from(["uv-args", "--format", "json", "-c", "-v a"]).unwrap();
        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.command.as_deref(), Some("-v a"));
    }

    #[test]
    fn missing_schema_file_is_an_error() {
        let opts = CliOptions::try_parse_from(["uv-args", "--schema", "/nonexistent/args.toml"]).unwrap();
        let err = opts.parser().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/args.toml"));
    }
}
