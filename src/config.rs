use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::FilterRules;

pub const CONFIG_FILE_NAME: &str = ".keysweeprc.json";

/// Folder names that are never worth scanning for translation usages.
pub const DEFAULT_IGNORED_FOLDERS: &[&str] = &[
    ".vscode",
    ".git",
    "build",
    "bin",
    "node_modules",
    "test",
    "venv",
    "css",
    "well-known",
    "im",
    "fonts",
    "env",
];

/// What the report file contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// JSON array of keys never referenced.
    #[default]
    Unused,
    /// JSON object of referenced keys and their values.
    Found,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_translation_file")]
    pub translation_file: String,
    #[serde(default = "default_searched_folders")]
    pub searched_folders: Vec<String>,
    #[serde(default = "default_searched_file_extensions")]
    pub searched_file_extensions: Vec<String>,
    #[serde(default)]
    pub ignore_file_patterns: Vec<String>,
    #[serde(default = "default_ignore_folder_patterns")]
    pub ignore_folder_patterns: Vec<String>,
    #[serde(default = "default_size_threshold_bytes")]
    pub size_threshold_bytes: u64,
    #[serde(default = "default_true")]
    pub write_to_console: bool,
    #[serde(default)]
    pub write_to_file: bool,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default)]
    pub output_mode: OutputMode,
    #[serde(default)]
    pub update_translation: bool,
    #[serde(default = "default_true")]
    pub make_backups: bool,
}

fn default_translation_file() -> String {
    "i18n/en-us.json".to_string()
}

fn default_searched_folders() -> Vec<String> {
    ["src", "app"].map(String::from).to_vec()
}

fn default_searched_file_extensions() -> Vec<String> {
    ["py", "js", "html"].map(String::from).to_vec()
}

fn default_ignore_folder_patterns() -> Vec<String> {
    DEFAULT_IGNORED_FOLDERS
        .iter()
        .map(|name| format!("(^|/){}$", regex::escape(name)))
        .collect()
}

fn default_size_threshold_bytes() -> u64 {
    1024 * 1024
}

fn default_output_path() -> String {
    "unused-translations.json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation_file: default_translation_file(),
            searched_folders: default_searched_folders(),
            searched_file_extensions: default_searched_file_extensions(),
            ignore_file_patterns: Vec::new(),
            ignore_folder_patterns: default_ignore_folder_patterns(),
            size_threshold_bytes: default_size_threshold_bytes(),
            write_to_console: true,
            write_to_file: false,
            output_path: default_output_path(),
            output_mode: OutputMode::Unused,
            update_translation: false,
            make_backups: true,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error naming the field if any regex fails to compile.
    pub fn validate(&self) -> Result<()> {
        compile_patterns(&self.ignore_file_patterns, "ignoreFilePatterns")?;
        compile_patterns(&self.ignore_folder_patterns, "ignoreFolderPatterns")?;
        Ok(())
    }

    /// Build the traversal filter from this configuration.
    pub fn filter_rules(&self) -> Result<FilterRules> {
        let allowed_extensions: HashSet<String> = self
            .searched_file_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();

        Ok(FilterRules {
            allowed_extensions,
            ignore_file_patterns: compile_patterns(
                &self.ignore_file_patterns,
                "ignoreFilePatterns",
            )?,
            ignore_folder_patterns: compile_patterns(
                &self.ignore_folder_patterns,
                "ignoreFolderPatterns",
            )?,
            size_threshold_bytes: self.size_threshold_bytes,
        })
    }
}

fn compile_patterns(patterns: &[String], field: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern)
                .with_context(|| format!("Invalid regex in '{}': \"{}\"", field, pattern))
        })
        .collect()
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory that relative paths in the config resolve against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
