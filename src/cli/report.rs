//! Final summary lines printed after a command finishes.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
use super::exit_status::ExitStatus;
use crate::log::{FAILURE_MARK, SUCCESS_MARK};

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print the summary to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(summary, result.exit_status, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_scan<W: Write>(summary: &ScanSummary, status: ExitStatus, writer: &mut W) {
    if let Some(path) = &summary.report_path {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Report written to {}", path.display()).green()
        );
    }

    if let Some(rewrite) = &summary.rewrite {
        if let Some(backup) = &rewrite.backup_path {
            let _ = writeln!(writer, "  Backup written to {}", backup.display());
        }
        let msg = format!(
            "Removed {} unused {} from {}",
            rewrite.removed,
            if rewrite.removed == 1 {
                "translation"
            } else {
                "translations"
            },
            rewrite.catalog_path.display()
        );
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    }

    let files = summary.stats.candidates;
    let msg = format!(
        "Checked {} source {} against {} {}",
        files,
        if files == 1 { "file" } else { "files" },
        summary.total_keys,
        if summary.total_keys == 1 {
            "translation"
        } else {
            "translations"
        }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());

    let unreadable = summary.stats.unreadable_files + summary.stats.walk_errors;
    if unreadable > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read; their usages were not counted",
            "warning:".bold().yellow(),
            unreadable
        );
    }

    if status == ExitStatus::Failure {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Unused translations found (--fail-on-unused)".red()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    }
}
