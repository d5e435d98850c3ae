pub mod init;
pub mod scan;

use std::path::PathBuf;

use super::exit_status::ExitStatus;
use crate::{core::ScanStats, report::RewriteSummary};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub total_keys: usize,
    pub stats: ScanStats,
    pub report_path: Option<PathBuf>,
    pub rewrite: Option<RewriteSummary>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub created: bool,
}

/// Result of running a keysweep command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
