//! Lazy traversal of the scan roots.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

use super::filter::FilterRules;
use crate::log::ScanLog;

/// A file that passed every folder and file filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Directory containing the file.
    pub dir: PathBuf,
    /// The name as stored on disk, which need not be valid UTF-8.
    pub file_name: OsString,
}

impl CandidateFile {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

type EntryIter<'a> = Box<dyn Iterator<Item = walkdir::Result<DirEntry>> + 'a>;

/// Walks each root in turn, yielding candidate files.
///
/// Entries are sorted by file name at every level, so the order is stable
/// for a fixed filesystem snapshot. Errors are logged and counted; the walk
/// carries on with the next entry.
pub struct DirectoryWalker<'a> {
    roots: std::vec::IntoIter<PathBuf>,
    current: Option<EntryIter<'a>>,
    rules: &'a FilterRules,
    log: &'a dyn ScanLog,
    errors: usize,
    skipped_files: usize,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(roots: Vec<PathBuf>, rules: &'a FilterRules, log: &'a dyn ScanLog) -> Self {
        Self {
            roots: roots.into_iter(),
            current: None,
            rules,
            log,
            errors: 0,
            skipped_files: 0,
        }
    }

    /// Paths that could not be read (missing roots, unreadable folders).
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Files rejected by [`FilterRules::should_skip_file`].
    pub fn skipped_files(&self) -> usize {
        self.skipped_files
    }

    fn walk_root(&self, root: PathBuf) -> EntryIter<'a> {
        let rules = self.rules;
        let log = self.log;
        let base = root.clone();

        self.log.debug(&format!("Walking {}", root.display()));

        let iter = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
                if rules.should_skip_folder(relative) {
                    log.debug(&format!("Skipping folder {}", entry.path().display()));
                    return false;
                }
                true
            });
        Box::new(iter)
    }
}

impl Iterator for DirectoryWalker<'_> {
    type Item = CandidateFile;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_none() {
                let root = self.roots.next()?;
                self.current = Some(self.walk_root(root));
            }

            let next = self.current.as_mut().and_then(|iter| iter.next());
            let entry = match next {
                None => {
                    self.current = None;
                    continue;
                }
                Some(Err(err)) => {
                    self.errors += 1;
                    self.log.warn(&format!("Cannot access path: {}", err));
                    continue;
                }
                Some(Ok(entry)) => entry,
            };

            if !entry.file_type().is_file() {
                continue;
            }

            // Filters see a lossy name; the candidate keeps the real one.
            if self
                .rules
                .should_skip_file(&entry.file_name().to_string_lossy(), self.log)
            {
                self.skipped_files += 1;
                continue;
            }

            let dir = entry
                .path()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            return Some(CandidateFile {
                dir,
                file_name: entry.file_name().to_os_string(),
            });
        }
    }
}
