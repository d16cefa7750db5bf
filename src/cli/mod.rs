//! Command-line interface for Substrscan
//!
//! This module provides the main CLI structure and command handling.
//! It uses clap for argument parsing and provides a clean, user-friendly
//! interface.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// Substrscan - Parallel longest repeated substring scanner
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan a string for its longest repeated substrings
    Scan(commands::scan::ScanArgs),
    /// Show version information
    Version,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self, output: &Output) -> Result<()> {
        match self.command {
            Some(Commands::Scan(args)) => commands::scan::execute(args, output),
            Some(Commands::Version) => commands::version::execute(output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
