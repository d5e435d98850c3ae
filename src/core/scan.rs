//! One full scan pass: walk every root, feed each candidate to the tracker.

use std::{collections::BTreeMap, path::PathBuf};

use super::{
    catalog::TranslationCatalog,
    filter::FilterRules,
    tracker::{FileScan, FoundKey, UsageTracker},
    walker::DirectoryWalker,
};
use crate::log::ScanLog;

/// Inputs for [`scan`].
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub roots: Vec<PathBuf>,
    pub rules: FilterRules,
}

/// Counters describing a finished scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files that passed the filters.
    pub candidates: usize,
    /// Files actually read from disk.
    pub files_read: usize,
    /// Files rejected by extension or ignore pattern.
    pub skipped_files: usize,
    /// Candidates that vanished or could not be read.
    pub unreadable_files: usize,
    /// Paths the walker could not access.
    pub walk_errors: usize,
}

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub found: BTreeMap<String, FoundKey>,
    pub stats: ScanStats,
}

/// Search every candidate file under `request.roots` for the catalog keys.
///
/// Local failures (missing roots, unreadable folders or files) are logged and
/// counted in [`ScanStats`]; they never abort the scan.
pub fn scan(
    catalog: &TranslationCatalog,
    request: &ScanRequest,
    log: &dyn ScanLog,
) -> ScanOutcome {
    let mut tracker = UsageTracker::new(catalog);
    let mut walker = DirectoryWalker::new(request.roots.clone(), &request.rules, log);
    let mut stats = ScanStats::default();

    for file in walker.by_ref() {
        stats.candidates += 1;
        if tracker.scan_file(&file, request.rules.size_threshold_bytes, log)
            == FileScan::Unreadable
        {
            stats.unreadable_files += 1;
        }
    }

    stats.files_read = tracker.files_read();
    stats.skipped_files = walker.skipped_files();
    stats.walk_errors = walker.errors();

    log.debug(&format!(
        "Scanned {} file(s), {} of {} key(s) found",
        stats.files_read,
        catalog.len() - tracker.pending_count(),
        catalog.len()
    ));

    ScanOutcome {
        found: tracker.into_found(),
        stats,
    }
}
