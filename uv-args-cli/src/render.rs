//! Rendering of parse results for the terminal.

use anyhow::Result;
use colored::Colorize;
use uv_args::{ParseFailure, ParsedArgs, Schema, VERSION};

use crate::options::OutputFormat;

/// Format parsed arguments for output
pub fn format_parsed(args: &ParsedArgs, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => args.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&args.to_json()?)?,
    })
}

/// Format a failed parse, one line per error
pub fn format_failure(failure: &ParseFailure, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => failure
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(failure)?,
    })
}

/// Render parsed arguments
pub fn render_args(args: &ParsedArgs, format: OutputFormat) -> Result<()> {
    println!("{}", format_parsed(args, format)?);
    Ok(())
}

/// Render a failed parse
pub fn render_failure(failure: &ParseFailure, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            println!("{} parse failed during {}", "Error:".bright_red().bold(), failure.stage);
            for error in &failure.errors {
                println!("  {} {}", "✗".bright_red(), error);
            }
        }
        OutputFormat::Json => println!("{}", format_failure(failure, format)?),
    }
    Ok(())
}

/// Render the declared arguments of the active schema
pub fn render_schema(schema: &Schema) {
    if schema.is_empty() {
        println!("{}", "No schema loaded; any arguments are accepted.".bright_white());
        return;
    }

    println!("{}", "Expected arguments:".bold().bright_blue());
    for arg in schema.iter() {
        let marker = if arg.is_flag() { " (flag)" } else { "" };
        println!("  {}{}", arg.to_string().bright_green(), marker.bright_white());
    }
}

/// Render a welcome message when entering the shell
pub fn render_welcome() {
    println!("{} {}", "uv-args shell".bold().bright_purple(), VERSION.bright_white());
    println!(
        "Type a command such as {} - type {} for help.",
        "value -name \"some text\" -flag".bright_cyan(),
        "/help".bright_green()
    );
    println!();
}

/// Render help for the shell commands
pub fn render_help() {
    println!("{}", "Shell Commands:".bold().bright_blue());
    println!("  {}{} {}", "/schema".bright_green(), ":".bright_white(), "Show the expected arguments".bright_white());
    println!("  {}{} {}", "/help".bright_green(), ":".bright_white(), "Show this help message".bright_white());
    println!("  {}{} {}", "/exit".bright_green(), ":".bright_white(), "Exit the shell".bright_white());
    println!("  {}{} {}", "/quit".bright_green(), ":".bright_white(), "Exit the shell".bright_white());
    println!();
    println!("{}", "Syntax:".bold().bright_blue());
    println!("  {}   named value", "-name value".bright_cyan());
    println!("  {}         flag, or {} / {}", "-flag".bright_cyan(), "-flag true".bright_cyan(), "-flag false".bright_cyan());
    println!("  {}         positional value, bound in schema order", "value".bright_cyan());
    println!("  {}   quoted value with spaces", "\"a b c\"".bright_cyan());
}

/// Render an error message
pub fn render_error(message: &str) {
    println!("{} {}", "Error:".bright_red().bold(), message);
}
