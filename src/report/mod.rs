//! Turning a finished scan into console lines, a report file and an
//! optionally pruned catalog.

pub mod diff;
pub mod json_writer;
pub mod rewrite;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Result;
use serde_json::Value;

pub use diff::{compare_keys, unused_keys};
pub use rewrite::{BACKUP_SUFFIX, RewriteSummary, backup_path, rewrite_catalog};

use crate::{
    config::{ConfigLoadResult, OutputMode},
    core::{FoundKey, TranslationCatalog},
    log::ScanLog,
};
use self::json_writer::{sorted_object, write_json};

/// Which outputs to produce after a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub write_to_console: bool,
    pub write_to_file: bool,
    pub output_path: PathBuf,
    pub output_mode: OutputMode,
    pub update_translation: bool,
    pub make_backups: bool,
}

impl ReportSettings {
    pub fn from_config(loaded: &ConfigLoadResult) -> Self {
        let config = &loaded.config;
        Self {
            write_to_console: config.write_to_console,
            write_to_file: config.write_to_file,
            output_path: loaded.resolve(&config.output_path),
            output_mode: config.output_mode,
            update_translation: config.update_translation,
            make_backups: config.make_backups,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub unused: Vec<String>,
    pub report_path: Option<PathBuf>,
    pub rewrite: Option<RewriteSummary>,
}

/// Compute the unused keys and produce every configured output.
///
/// Outputs run in order: console, report file, catalog rewrite. A failed
/// write stops there and is returned to the caller. Only the console summary
/// is logged here; the caller reports written files from the returned
/// [`EmitSummary`].
pub fn emit(
    catalog: &TranslationCatalog,
    found: &BTreeMap<String, FoundKey>,
    settings: &ReportSettings,
    log: &dyn ScanLog,
) -> Result<EmitSummary> {
    let unused = unused_keys(catalog, found);

    if settings.write_to_console {
        log_summary(&unused, catalog.len(), log);
    }

    let report_path = if settings.write_to_file {
        write_report(&settings.output_path, settings.output_mode, &unused, found)?;
        Some(settings.output_path.clone())
    } else {
        None
    };

    let rewrite = if settings.update_translation {
        Some(rewrite_catalog(catalog, found, settings.make_backups)?)
    } else {
        None
    };

    Ok(EmitSummary {
        unused,
        report_path,
        rewrite,
    })
}

/// Log the unused count followed by every unused key.
pub fn log_summary(unused: &[String], total: usize, log: &dyn ScanLog) {
    if unused.is_empty() {
        log.info(&format!("No unused translations ({} checked)", total));
        return;
    }

    let mut message = format!(
        "Found {} unused {} (of {}):",
        unused.len(),
        plural(unused.len(), "translation", "translations"),
        total
    );
    for key in unused {
        message.push_str("\n  ");
        message.push_str(key);
    }
    log.success(&message);
}

/// Write the unused keys (as an array) or the found entries (as an object).
pub fn write_report(
    path: &Path,
    mode: OutputMode,
    unused: &[String],
    found: &BTreeMap<String, FoundKey>,
) -> Result<()> {
    let value = match mode {
        OutputMode::Unused => Value::Array(unused.iter().cloned().map(Value::String).collect()),
        OutputMode::Found => Value::Object(sorted_object(
            found.iter().map(|(k, f)| (k.as_str(), f.value.as_str())),
        )),
    };
    write_json(path, &value)
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
