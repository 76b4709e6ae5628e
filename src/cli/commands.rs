//! Command dispatch: turns parsed arguments into a repository creation

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::{CreationRequest, Visibility};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Load settings, wire real services and run the command.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("execute_command: settings={:?}", settings);

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let container = ServiceContainer::new(settings);
    run_with(cli, &container)
}

/// Run the command against an already wired container.
#[instrument(skip_all)]
pub fn run_with(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let request = build_request(cli)?;
    let service = &container.repo_service;

    if cli.dry_run {
        output::info(&service.plan(&request));
        return Ok(());
    }

    let outcome = service.invoke(&request)?;
    output::success(&format!(
        "Successfully created repository: {}",
        outcome.slug
    ));
    std::io::stdout()
        .write_all(outcome.stdout.as_bytes())
        .map_err(|e| InfraError::io("write gh output", e))?;
    Ok(())
}

/// Translate CLI flags into a validated request.
pub fn build_request(cli: &Cli) -> CliResult<CreationRequest> {
    let (Some(org), Some(name)) = (cli.org.as_deref(), cli.name.as_deref()) else {
        return Err(CliError::InvalidArgs(
            "--org and --name are required".into(),
        ));
    };

    let request = CreationRequest::new(org, name)
        .map_err(ApplicationError::from)?
        .with_description(cli.description.clone())
        .with_visibility(Visibility::from_private_flag(cli.private))
        .with_clone(cli.clone);
    Ok(request)
}
