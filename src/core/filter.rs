//! Folder and file predicates applied during traversal.

use std::{collections::HashSet, path::Path};

use regex::Regex;

use crate::log::ScanLog;

/// Why a file was (or was not) selected for scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDecision {
    Scan,
    MissingExtension,
    DisallowedExtension,
    IgnoredByPattern,
}

impl FileDecision {
    pub fn is_skip(&self) -> bool {
        !matches!(self, FileDecision::Scan)
    }
}

/// Include/exclude rules for one scan. Immutable once built.
#[derive(Debug, Clone)]
pub struct FilterRules {
    /// Extensions without the leading dot, e.g. `js`.
    pub allowed_extensions: HashSet<String>,
    pub ignore_file_patterns: Vec<Regex>,
    pub ignore_folder_patterns: Vec<Regex>,
    pub size_threshold_bytes: u64,
}

impl FilterRules {
    /// True if any ignore-folder pattern is found in `path`.
    ///
    /// The walker passes the folder path relative to its scan root using `/`
    /// separators, so patterns behave the same on every platform.
    pub fn should_skip_folder(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        let normalized = if std::path::MAIN_SEPARATOR == '/' {
            path_str
        } else {
            path_str.replace(std::path::MAIN_SEPARATOR, "/").into()
        };
        self.ignore_folder_patterns
            .iter()
            .any(|pattern| pattern.is_match(&normalized))
    }

    /// Classify a file name. Extension checks run before the pattern checks.
    pub fn classify_file(&self, name: &str) -> FileDecision {
        let Some(ext) = Path::new(name).extension() else {
            return FileDecision::MissingExtension;
        };
        if !self
            .allowed_extensions
            .contains(ext.to_string_lossy().as_ref())
        {
            return FileDecision::DisallowedExtension;
        }
        if self
            .ignore_file_patterns
            .iter()
            .any(|pattern| pattern.is_match(name))
        {
            return FileDecision::IgnoredByPattern;
        }
        FileDecision::Scan
    }

    /// Like [`classify_file`](Self::classify_file), warning about files
    /// without an extension.
    pub fn should_skip_file(&self, name: &str, log: &dyn ScanLog) -> bool {
        let decision = self.classify_file(name);
        match decision {
            FileDecision::MissingExtension => {
                log.warn(&format!("Skipping file without extension: {}", name));
            }
            FileDecision::DisallowedExtension | FileDecision::IgnoredByPattern => {
                log.debug(&format!("Skipping {}: {:?}", name, decision));
            }
            FileDecision::Scan => {}
        }
        decision.is_skip()
    }
}
