//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::OutputFormat;

/// CEML - circular-economy model compiler
#[derive(Parser, Debug)]
#[command(name = "ceml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout (for CI)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ceml.toml beside the model, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an artifact from a model document
    Generate {
        /// Model document (.yaml, .json or .toml)
        file: PathBuf,

        /// File to write
        destination: PathBuf,

        /// Output format
        #[arg(value_enum, ignore_case = true)]
        format: OutputFormat,
    },
}
