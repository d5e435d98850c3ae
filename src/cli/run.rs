use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, scan::scan},
};
use crate::log::ScanLog;

/// Dispatch to the handler for the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary and exit status
/// - `Err` for fatal errors (bad config, unreadable catalog, failed writes)
pub fn run(Arguments { command }: Arguments, log: &dyn ScanLog) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd, log),
        Some(Command::Init) => {
            let dir = env::current_dir().context("Failed to determine current directory")?;
            init(&dir, log)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
