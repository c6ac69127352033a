//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and `PowerShell`.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use genclient_core::cli::ExitCode;
use std::io;
use tracing::info;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use genclient_cli::commands::completions;
/// use clap::Command;
/// use clap_complete::Shell;
///
/// let mut cmd = Command::new("gen-client");
/// let mut script = Vec::new();
/// completions::generate_completions(Shell::Bash, &mut cmd, &mut script);
/// assert!(!script.is_empty());
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn io::Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Errors
///
/// Never fails; the `Result` keeps the signature uniform across commands.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    info!("Generating {} completions", shell);
    generate_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_generate_completions_bash() {
        let mut cmd = Cli::command();
        let mut script = Vec::new();
        generate_completions(Shell::Bash, &mut cmd, &mut script);

        let script = String::from_utf8(script).unwrap();
        assert!(script.contains("gen-client"));
        assert!(script.contains("generate"));
    }

    #[test]
    fn test_generate_completions_all_shells() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            let mut cmd = Cli::command();
            let mut script = Vec::new();
            generate_completions(shell, &mut cmd, &mut script);
            assert!(!script.is_empty(), "empty script for {shell}");
        }
    }
}
