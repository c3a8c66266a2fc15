use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands.
///
/// - `Success` (0): every catalog built without errors
/// - `Failure` (1): some keys failed to build
/// - `Error` (2): a catalog or the config could not be read or decoded
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

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.failed_catalog_count() > 0 {
        ExitStatus::Error
    } else if result.error_count() > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
