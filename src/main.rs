//! CEML CLI - circular-economy model compiler
//!
//! Usage: ceml [--json] [-v...] [--config <PATH>] generate <FILE> <DESTINATION> <FORMAT>

mod commands;

use anyhow::Result;
use clap::Parser;

use ceml::infrastructure::JsonEventSink;
use ceml::presentation::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let json = cli.json;

    let outcome = match cli.command {
        Commands::Generate {
            file,
            destination,
            format,
        } => commands::cmd_generate(
            &file,
            &destination,
            format,
            cli.config.as_deref(),
            cli.json,
            cli.verbose,
        ),
    };

    if let Err(err) = &outcome {
        if json {
            JsonEventSink::stdout().emit_error(&format!("{err:#}"));
        }
    }
    outcome
}
