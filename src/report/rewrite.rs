//! In-place catalog rewrite with an optional backup.

use std::{
    collections::BTreeMap,
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

use super::json_writer::{sorted_object, write_json};
use crate::core::{FoundKey, TranslationCatalog};

pub const BACKUP_SUFFIX: &str = ".bak";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    pub catalog_path: PathBuf,
    pub backup_path: Option<PathBuf>,
    pub kept: usize,
    pub removed: usize,
}

/// `i18n/en-us.json` → `i18n/en-us.json.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Replace the catalog file with only the found entries, sorted by key.
///
/// With `make_backup`, the full pre-rewrite catalog (also sorted) is written
/// next to it first. If that write fails the catalog file is left untouched.
pub fn rewrite_catalog(
    catalog: &TranslationCatalog,
    found: &BTreeMap<String, FoundKey>,
    make_backup: bool,
) -> Result<RewriteSummary> {
    let catalog_path = catalog.path();

    let backup_path = if make_backup {
        let path = backup_path(catalog_path);
        write_json(&path, &Value::Object(sorted_object(catalog.iter())))
            .with_context(|| {
                format!(
                    "Failed to back up {}; translation file left unchanged",
                    catalog_path.display()
                )
            })?;
        Some(path)
    } else {
        None
    };

    let kept = sorted_object(
        found
            .iter()
            .filter(|(key, _)| catalog.contains_key(key))
            .map(|(key, entry)| (key.as_str(), entry.value.as_str())),
    );
    let kept_count = kept.len();
    write_json(catalog_path, &Value::Object(kept))
        .with_context(|| format!("Failed to rewrite {}", catalog_path.display()))?;

    Ok(RewriteSummary {
        catalog_path: catalog_path.to_path_buf(),
        backup_path,
        kept: kept_count,
        removed: catalog.len() - kept_count,
    })
}
