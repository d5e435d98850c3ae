use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::{args::ScanCommand, exit_status::ExitStatus};
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    config::load_config,
    core::{ScanRequest, TranslationCatalog, scan as run_scan},
    log::ScanLog,
    report::{ReportSettings, emit},
};

pub fn scan(cmd: ScanCommand, log: &dyn ScanLog) -> Result<CommandResult> {
    let args = cmd.args;
    let start_dir = match args.common.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to determine current directory")?,
    };

    let loaded = load_config(&start_dir)?;
    if loaded.from_file {
        log.debug(&format!("Using config from {}", loaded.base_dir.display()));
    } else {
        log.debug("No config file found, using defaults");
    }
    let config = &loaded.config;

    // Command line paths are taken as given; config paths resolve against
    // the config file's directory.
    let catalog_path = args
        .translation_file
        .unwrap_or_else(|| loaded.resolve(&config.translation_file));
    let roots: Vec<PathBuf> = if args.folders.is_empty() {
        config
            .searched_folders
            .iter()
            .map(|folder| loaded.resolve(folder))
            .collect()
    } else {
        args.folders
    };

    let mut settings = ReportSettings::from_config(&loaded);
    if let Some(output) = args.output {
        settings.write_to_file = true;
        settings.output_path = output;
    }
    if let Some(mode) = args.mode {
        settings.output_mode = mode;
    }
    if args.apply {
        settings.update_translation = true;
    }
    if args.no_backup {
        settings.make_backups = false;
    }

    let catalog = TranslationCatalog::load(&catalog_path)?;
    let request = ScanRequest {
        roots,
        rules: config.filter_rules()?,
    };

    let outcome = run_scan(&catalog, &request, log);
    let emitted = emit(&catalog, &outcome.found, &settings, log)?;

    let exit_status = ExitStatus::for_scan(emitted.unused.len(), args.fail_on_unused);

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            total_keys: catalog.len(),
            stats: outcome.stats,
            report_path: emitted.report_path,
            rewrite: emitted.rewrite,
        }),
        exit_status,
    })
}
