//! Command dispatch: delegate to an installed cli or bootstrap a project

use std::path::Path;

use clap::Parser;
use tracing::{debug, instrument};

use crate::application::services::InitOutcome;
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Resolution;
use crate::infrastructure::InfraError;

/// Run the launcher for raw `args` (without the program name) in `cwd`.
///
/// Returns the process exit code for every non-error path.
pub fn execute_command(
    args: &[String],
    cwd: &Path,
    container: &ServiceContainer,
) -> CliResult<i32> {
    if let Resolution::Present(module) = container.resolver.resolve(cwd) {
        debug!("execute_command: delegating to {}", module.entry().display());
        return module.run(args, cwd).map_err(|e| {
            CliError::from(InfraError::io(
                format!("run {}", module.entry().display()),
                e,
            ))
        });
    }

    match parse_command(args)? {
        Commands::Init {
            name: Some(name), ..
        } if !name.is_empty() => _init(&name, cwd, container),
        Commands::Init { .. } => Err(CliError::Usage(
            "Usage: react-native init <ProjectName>".to_string(),
        )),
        Commands::Other(tokens) => Err(CliError::UnrecognizedCommand(
            tokens.into_iter().next().unwrap_or_default(),
        )),
    }
}

/// Parse the bootstrap command surface.
///
/// Anything clap rejects is reported as an unrecognized first token.
pub fn parse_command(args: &[String]) -> CliResult<Commands> {
    let Some(first) = args.first() else {
        return Err(CliError::NoCommand);
    };
    let argv = std::iter::once("react-native").chain(args.iter().map(String::as_str));
    match Cli::try_parse_from(argv) {
        Ok(Cli {
            command: Some(command),
        }) => Ok(command),
        Ok(Cli { command: None }) => Err(CliError::NoCommand),
        Err(e) => {
            debug!("parse_command: clap rejected args: {}", e);
            Err(CliError::UnrecognizedCommand(first.clone()))
        }
    }
}

#[instrument(skip(container))]
fn _init(name: &str, cwd: &Path, container: &ServiceContainer) -> CliResult<i32> {
    let outcome = container
        .project_service()
        .init(name, cwd, |root| output::info(&walkthrough_notice(root)))?;
    match outcome {
        InitOutcome::Cancelled => {
            output::info("Project initialization canceled");
            Ok(exitcode::OK)
        }
        InitOutcome::Initialized { root, exit_code } => {
            debug!("init: {} finished with {}", root.display(), exit_code);
            Ok(exit_code)
        }
    }
}

/// Printed once the target directory is approved, before anything is written.
pub fn walkthrough_notice(root: &Path) -> String {
    format!(
        "This will walk you through creating a new React Native project in {}",
        root.display()
    )
}
