//! Command execution and runtime logic.
//!
//! Contains command dispatch, logging initialization, and the mapping from
//! errors to exit codes.

use anyhow::Result;
use genclient_core::Error;
use genclient_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Commands;
use crate::commands;

/// Initializes logging infrastructure.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// `RUST_LOG` selects the level, `info` by default; `verbose` forces
/// `debug`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            root,
            config,
            fail_fast,
            dry_run,
        } => commands::generate::run(root, config, fail_fast, dry_run, output_format),
        Commands::Scan { root, config } => commands::scan::run(root, config, output_format),
        Commands::Completions { shell } => {
            use crate::cli::Cli;
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}

/// Maps a failed command to its exit code.
///
/// Errors caused by the user's input (bad arguments, configuration,
/// manifest, or interface files) exit with [`ExitCode::INVALID_INPUT`];
/// everything else with [`ExitCode::PARTIAL_FAILURE`].
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    let input = error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<Error>())
        .any(Error::is_input_error);

    if input {
        ExitCode::INVALID_INPUT
    } else {
        ExitCode::PARTIAL_FAILURE
    }
}
