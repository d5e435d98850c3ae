use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::cli::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::log::ScanLog;

/// Write the default config into `dir`, refusing to overwrite an existing one.
pub fn init(dir: &Path, log: &dyn ScanLog) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        log.error(&format!("{} already exists", CONFIG_FILE_NAME));
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary {
                path: config_path,
                created: false,
            }),
            exit_status: ExitStatus::Failure,
        });
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: config_path,
            created: true,
        }),
        exit_status: ExitStatus::Success,
    })
}
