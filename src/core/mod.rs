//! Scan engine.
//!
//! - `catalog`: the flat translation catalog being checked
//! - `filter`: folder/file include and exclude predicates
//! - `walker`: deterministic, lazy directory traversal
//! - `strategy`: whole-file vs line-scoped substring search
//! - `tracker`: per-key pending/found state
//! - `scan`: one full pass tying the pieces together

pub mod catalog;
pub mod filter;
pub mod scan;
pub mod strategy;
pub mod tracker;
pub mod walker;

pub use catalog::TranslationCatalog;
pub use filter::{FileDecision, FilterRules};
pub use scan::{ScanOutcome, ScanRequest, ScanStats, scan};
pub use strategy::{ContentMatch, SearchStrategy};
pub use tracker::{FileScan, FoundKey, KeyState, UsageTracker};
pub use walker::{CandidateFile, DirectoryWalker};
