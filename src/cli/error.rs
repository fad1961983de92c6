//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("You did not pass any commands, did you mean to run `react-native init`?")]
    NoCommand,

    #[error("{0}")]
    Usage(String),

    #[error("Command `{0}` unrecognized. Did you mean to run this inside a react-native project?")]
    UnrecognizedCommand(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(InfraError::Application(ApplicationError::DelegateUnavailable(_))) => {
                crate::exitcode::SOFTWARE
            }
            _ => crate::exitcode::FAILURE,
        }
    }
}
