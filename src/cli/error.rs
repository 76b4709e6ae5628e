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

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the process exit code for this error.
    ///
    /// Every failure maps to the same code; callers only distinguish success from failure.
    pub fn exit_code(&self) -> i32 {
        crate::exitcode::FAILURE
    }

    /// The underlying application error, if any.
    pub fn application(&self) -> Option<&ApplicationError> {
        match self {
            CliError::Infra(InfraError::Application(e)) => Some(e),
            _ => None,
        }
    }
}
