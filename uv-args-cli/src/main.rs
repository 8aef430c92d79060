//! uv-args shell entry point.
//!
//! Loads an optional command schema and parses commands against it, either
//! once (`--command`), interactively, or line by line from piped input.

mod options;
mod render;
mod repl;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use options::CliOptions;
use repl::Shell;

fn main() -> Result<()> {
    let opts = CliOptions::parse();
    init_tracing(opts.debug);

    let parser = opts.parser()?;
    info!("Loaded schema with {} argument(s)", parser.schema().len());

    let shell = Shell::new(parser, opts.format);

    if let Some(command) = &opts.command {
        if !shell.run_command(command)? {
            std::process::exit(1);
        }
        return Ok(());
    }

    if atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout) {
        shell.run_interactive()
    } else {
        shell.run_piped()
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        "uv_args=debug,uv_args_cli=debug"
    } else {
        "uv_args=warn,uv_args_cli=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
