//! Interactive shell loop.

use std::io::{self, BufRead};

use anyhow::Result;
use rustyline::{error::ReadlineError, Config, Editor};
use tracing::debug;
use uv_args::CommandParser;

use crate::options::OutputFormat;
use crate::render::{render_args, render_error, render_failure, render_help, render_schema, render_welcome};

/// What the shell should do after a line of input
#[derive(Debug, PartialEq, Eq)]
pub enum LineResult {
    Continue,
    Exit,
}

/// A shell session parsing each line against one schema
pub struct Shell {
    parser: CommandParser,
    format: OutputFormat,
}

impl Shell {
    pub fn new(parser: CommandParser, format: OutputFormat) -> Self {
        Self { parser, format }
    }

    /// Parse one command and print the result; returns whether it parsed
    pub fn run_command(&self, input: &str) -> Result<bool> {
        match self.parser.parse(input) {
            Ok(args) => {
                render_args(&args, self.format)?;
                Ok(true)
            }
            Err(failure) => {
                render_failure(&failure, self.format)?;
                Ok(false)
            }
        }
    }

    /// Handle one line of input
    pub fn handle_line(&self, line: &str) -> Result<LineResult> {
        let input = line.trim();
        match input {
            "" => {}
            "/exit" | "/quit" => return Ok(LineResult::Exit),
            "/help" => render_help(),
            "/schema" => render_schema(self.parser.schema()),
            _ if input.starts_with('/') => {
                render_error(&format!("Unknown command: {}", input));
                render_error("Type '/help' for available commands");
            }
            _ => {
                self.run_command(input)?;
            }
        }
        Ok(LineResult::Continue)
    }

    /// Run the interactive loop with line editing
    pub fn run_interactive(&self) -> Result<()> {
        let config = Config::builder()
            .history_ignore_space(true)
            .history_ignore_dups(true)?
            .build();
        let mut editor: Editor<(), rustyline::history::DefaultHistory> = Editor::with_config(config)?;

        render_welcome();

        loop {
            let line = match editor.readline("[uv-args]> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    line
                }
                // Ctrl+C and Ctrl+D both leave the shell
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(anyhow::anyhow!("Readline error: {}", err)),
            };

            if self.handle_line(&line)? == LineResult::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Parse each line of piped input
    pub fn run_piped(&self) -> Result<()> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            debug!("Read line: {}", line);
            if self.handle_line(&line)? == LineResult::Exit {
                break;
            }
        }
        Ok(())
    }
}
