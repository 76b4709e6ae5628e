//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The external tool could not be found on this machine.
    #[error("{program} CLI not found. Please install it: {install_url}")]
    ToolNotInstalled {
        program: String,
        install_url: String,
    },

    /// The external tool ran and exited non-zero; `stderr` is passed through verbatim.
    #[error("Failed to create repository: {stderr}")]
    ExternalToolFailed {
        stderr: String,
        exit_code: Option<i32>,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    pub fn is_tool_not_installed(&self) -> bool {
        matches!(self, Self::ToolNotInstalled { .. })
    }

    pub fn is_external_failure(&self) -> bool {
        matches!(self, Self::ExternalToolFailed { .. })
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
