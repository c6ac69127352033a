//! gen-client: HTTP client wrappers for Kitex services.
//!
//! # Examples
//!
//! ```bash
//! # Generate clients for the repository in the current directory
//! gen-client generate
//!
//! # List the client files that would be processed
//! gen-client --format json scan --root ../vke
//!
//! # Install bash completions
//! gen-client completions bash > /etc/bash_completion.d/gen-client
//! ```

use clap::Parser;
use genclient_cli::Cli;
use genclient_cli::runner::{execute_command, exit_code_for, init_logging};
use genclient_core::cli::OutputFormat;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: failed to initialize logging: {e:#}");
    }

    let exit_code = cli
        .format
        .parse::<OutputFormat>()
        .map_err(anyhow::Error::from)
        .and_then(|format| execute_command(cli.command, format))
        .unwrap_or_else(|e| {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        });

    std::process::exit(exit_code.as_i32());
}
