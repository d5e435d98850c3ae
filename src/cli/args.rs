//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find unused translations and optionally prune them
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::OutputMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start looking for the config file from (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Translation catalog to check (overrides config file)
    #[arg(long)]
    pub translation_file: Option<PathBuf>,

    /// Folder to search; can be repeated (overrides config file)
    #[arg(long = "folder")]
    pub folders: Vec<PathBuf>,

    /// Write the report to this file (implies writing a report)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// What the report file contains
    #[arg(long, value_enum)]
    pub mode: Option<OutputMode>,

    /// Remove unused translations from the catalog
    #[arg(long)]
    pub apply: bool,

    /// Don't write a .bak copy before rewriting the catalog
    #[arg(long)]
    pub no_backup: bool,

    /// Exit with status 1 when unused translations are found
    #[arg(long)]
    pub fail_on_unused: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation keys never referenced in the searched folders
    Scan(ScanCommand),
    /// Initialize a new .keysweeprc.json configuration file
    Init,
}
