use std::process::ExitCode;

/// How the process ends.
///
/// - `Success` (0): nothing to act on, or unused keys were only reported
/// - `Failure` (1): unused keys under `--fail-on-unused`, or `init` found an
///   existing config
/// - `Error` (2): aborted before producing a result (bad config, unreadable
///   catalog, failed write)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status of a completed scan that left `unused` keys.
    pub fn for_scan(unused: usize, fail_on_unused: bool) -> Self {
        if fail_on_unused && unused > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
