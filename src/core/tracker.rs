//! Per-key usage state.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::PathBuf,
};

use super::{
    catalog::TranslationCatalog,
    strategy::SearchStrategy,
    walker::CandidateFile,
};
use crate::log::ScanLog;

/// First place a key was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundKey {
    /// The catalog value for the key.
    pub value: String,
    pub file: PathBuf,
    /// 1-based; only known for files searched line by line.
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyState {
    Pending,
    Found(FoundKey),
}

impl KeyState {
    pub fn is_pending(&self) -> bool {
        matches!(self, KeyState::Pending)
    }
}

/// What happened to one candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileScan {
    Searched {
        strategy: SearchStrategy,
        newly_found: usize,
    },
    /// Every key was already found, so the file was not opened.
    NothingPending,
    /// Metadata or content could not be read.
    Unreadable,
}

/// Tracks which catalog keys have been seen in source files.
///
/// A key moves from `Pending` to `Found` at most once and is never searched
/// for again afterwards.
pub struct UsageTracker<'a> {
    catalog: &'a TranslationCatalog,
    states: BTreeMap<&'a str, KeyState>,
    attempts: HashMap<&'a str, usize>,
    pending: usize,
    files_read: usize,
}

impl<'a> UsageTracker<'a> {
    pub fn new(catalog: &'a TranslationCatalog) -> Self {
        let states: BTreeMap<_, _> = catalog.keys().map(|k| (k, KeyState::Pending)).collect();
        Self {
            catalog,
            pending: states.len(),
            states,
            attempts: HashMap::new(),
            files_read: 0,
        }
    }

    pub fn state(&self, key: &str) -> Option<&KeyState> {
        self.states.get(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending
    }

    /// How many times `key` was searched for.
    pub fn attempts(&self, key: &str) -> usize {
        self.attempts.get(key).copied().unwrap_or(0)
    }

    /// How many files were read from disk.
    pub fn files_read(&self) -> usize {
        self.files_read
    }

    /// Search one file for every pending key.
    ///
    /// The file is read once; unreadable files are logged and contribute no
    /// matches.
    pub fn scan_file(
        &mut self,
        file: &CandidateFile,
        size_threshold_bytes: u64,
        log: &dyn ScanLog,
    ) -> FileScan {
        if self.pending == 0 {
            return FileScan::NothingPending;
        }

        let path = file.path();
        let size = match fs::metadata(&path) {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                log.warn(&format!("Cannot read {}: {}", path.display(), err));
                return FileScan::Unreadable;
            }
        };
        let strategy = SearchStrategy::classify(size, size_threshold_bytes);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log.warn(&format!("Cannot read {}: {}", path.display(), err));
                return FileScan::Unreadable;
            }
        };
        self.files_read += 1;
        let content = String::from_utf8_lossy(&bytes);

        let mut newly_found = 0;
        for (key, state) in self.states.iter_mut() {
            if !state.is_pending() {
                continue;
            }
            *self.attempts.entry(*key).or_insert(0) += 1;

            let Some(found) = strategy.find(&content, key) else {
                continue;
            };
            match found.line {
                Some(line) => log.debug(&format!("{} found at {}:{}", key, path.display(), line)),
                None => log.debug(&format!("{} found in {}", key, path.display())),
            }
            *state = KeyState::Found(FoundKey {
                value: self.catalog.get(key).unwrap_or_default().to_string(),
                file: path.clone(),
                line: found.line,
            });
            newly_found += 1;
        }
        self.pending -= newly_found;

        FileScan::Searched {
            strategy,
            newly_found,
        }
    }

    /// The keys that were found, with where they were found.
    pub fn into_found(self) -> BTreeMap<String, FoundKey> {
        self.states
            .into_iter()
            .filter_map(|(key, state)| match state {
                KeyState::Found(found) => Some((key.to_string(), found)),
                KeyState::Pending => None,
            })
            .collect()
    }
}
