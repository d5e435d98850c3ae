use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::diff::compare_keys;

/// Build a JSON object with keys in [`compare_keys`] order.
///
/// Relies on serde_json's `preserve_order` feature to keep insertion order.
pub fn sorted_object<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Map<String, Value> {
    let mut entries: Vec<(&str, &str)> = entries.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

/// Write `value` as pretty JSON with 2-space indentation and a trailing newline.
///
/// Creates parent directories if they don't exist.
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
