//! Keysweep - find translation keys that no source file references
//!
//! Keysweep walks the configured source folders, searches every file for the
//! literal text of each key in a flat JSON translation catalog, and reports
//! the keys that never appear. It can also rewrite the catalog without them.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scan engine (filters, traversal, search, usage tracking)
//! - `log`: Logging capability passed into the engine
//! - `report`: Unused-key diff, report file and catalog rewrite

pub mod cli;
pub mod config;
pub mod core;
pub mod log;
pub mod report;
