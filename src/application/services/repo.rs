//! Repository creation service
//!
//! Translates a `CreationRequest` into a single `gh repo create` run and
//! classifies how it ended. One external call per request, never retried.

use std::io;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{CreationOutcome, CreationRequest, Invocation};
use crate::infrastructure::traits::CommandRunner;

/// Creates remote repositories through the external hosting CLI.
pub struct RepoService {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl RepoService {
    /// Create a new repository service.
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> Self {
        Self { cmd, settings }
    }

    /// Build the invocation for a request without running anything.
    pub fn plan(&self, request: &CreationRequest) -> Invocation {
        Invocation::for_request(self.settings.gh_program.as_str(), request)
    }

    /// Create the repository described by `request`.
    ///
    /// Blocks until the external tool exits.
    ///
    /// # Errors
    /// * `ToolNotInstalled` - the configured program cannot be found
    /// * `ExternalToolFailed` - the program exited non-zero (stderr passed through)
    /// * `OperationFailed` - any other failure launching or waiting on the process
    #[instrument(skip(self), fields(slug = %request.slug()))]
    pub fn invoke(&self, request: &CreationRequest) -> ApplicationResult<CreationOutcome> {
        let invocation = self.plan(request);
        debug!("invoke: {}", invocation);

        let output = self
            .cmd
            .run(invocation.program(), &invocation.arg_refs())
            .map_err(|e| self.classify_launch_error(&invocation, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            debug!(
                "invoke: {} exited with {:?}",
                invocation.program(),
                output.status.code()
            );
            return Err(ApplicationError::ExternalToolFailed {
                stderr,
                exit_code: output.status.code(),
            });
        }

        info!("created repository {}", request.slug());
        Ok(CreationOutcome {
            slug: request.slug(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }

    fn classify_launch_error(&self, invocation: &Invocation, e: io::Error) -> ApplicationError {
        if e.kind() == io::ErrorKind::NotFound {
            return ApplicationError::ToolNotInstalled {
                program: invocation.program().to_string(),
                install_url: self.settings.install_url.clone(),
            };
        }
        ApplicationError::OperationFailed {
            context: format!("run {}", invocation.program()),
            source: Box::new(e),
        }
    }
}
