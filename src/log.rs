//! Console logging policy.
//!
//! The scan engine never prints directly. Every component receives a
//! `&dyn ScanLog` and reports through it, so the CLI decides how messages
//! look and tests can capture them.

use std::cell::RefCell;
use std::io::{self, Write};

use colored::{ColoredString, Colorize};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "debug:",
            Severity::Info => "info:",
            Severity::Success => SUCCESS_MARK,
            Severity::Warning => "warning:",
            Severity::Error => "error:",
        }
    }

    /// The one place severity maps to a terminal style.
    pub fn paint(&self) -> ColoredString {
        let label = self.label();
        match self {
            Severity::Debug => label.dimmed(),
            Severity::Info => label.bold().cyan(),
            Severity::Success => label.green(),
            Severity::Warning => label.bold().yellow(),
            Severity::Error => label.bold().red(),
        }
    }

    fn is_diagnostic(&self) -> bool {
        matches!(self, Severity::Debug | Severity::Warning | Severity::Error)
    }
}

/// Logging capability passed into the scan engine.
pub trait ScanLog {
    fn log(&self, severity: Severity, message: &str);

    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn success(&self, message: &str) {
        self.log(Severity::Success, message);
    }

    fn warn(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}

/// Prints to the terminal.
///
/// Info and success lines go to stdout, diagnostics to stderr. Debug lines
/// are dropped unless `verbose` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLog {
    pub verbose: bool,
}

impl ConsoleLog {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ScanLog for ConsoleLog {
    fn log(&self, severity: Severity, message: &str) {
        if severity == Severity::Debug && !self.verbose {
            return;
        }
        let line = format!("{} {}", severity.paint(), message);
        if severity.is_diagnostic() {
            let _ = writeln!(io::stderr().lock(), "{}", line);
        } else {
            let _ = writeln!(io::stdout().lock(), "{}", line);
        }
    }
}

/// Records every message in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: RefCell<Vec<(Severity, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.borrow().clone()
    }

    /// Messages logged at exactly `severity`.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl ScanLog for MemoryLog {
    fn log(&self, severity: Severity, message: &str) {
        self.entries
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}
