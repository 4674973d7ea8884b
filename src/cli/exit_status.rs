use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, no errors
/// - `Failure` (1): Command completed but found errors (or refused to run)
/// - `Error` (2): Command failed (config error, unreadable catalog, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
