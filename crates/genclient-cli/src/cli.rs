//! CLI argument definitions.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// gen-client - HTTP client wrappers for Kitex services.
///
/// Scans a repository for Kitex-generated `client.go` files and writes one
/// Go HTTP client per interface, forwarding every method to a generic
/// `CommonHandler` call.
#[derive(Parser, Debug)]
#[command(name = "gen-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate HTTP clients for every Kitex client in the repository.
    ///
    /// Reads the module name from `go.mod`, scans `pkg/model` for
    /// `client.go` files, and writes
    /// `pkg/client/<group>/generated.<service>.go` for each one.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Generate from the current directory
    /// gen-client generate
    ///
    /// # Preview without writing
    /// gen-client generate --root ../vke --dry-run
    /// ```
    Generate {
        /// Repository root containing `go.mod`
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// TOML configuration file overriding the default layout
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop at the first interface file that cannot be processed
        #[arg(long)]
        fail_fast: bool,

        /// Render every client without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// List the Kitex client files that would be processed.
    Scan {
        /// Repository root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// TOML configuration file overriding the default layout
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_generate_defaults() {
        let cli = Cli::parse_from(["gen-client", "generate"]);
        if let Commands::Generate {
            root,
            config,
            fail_fast,
            dry_run,
        } = cli.command
        {
            assert_eq!(root, PathBuf::from("."));
            assert_eq!(config, None);
            assert!(!fail_fast);
            assert!(!dry_run);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parsing_generate_with_options() {
        let cli = Cli::parse_from([
            "gen-client",
            "generate",
            "--root",
            "/src/vke",
            "--config",
            "gen.toml",
            "--fail-fast",
            "--dry-run",
        ]);
        if let Commands::Generate {
            root,
            config,
            fail_fast,
            dry_run,
        } = cli.command
        {
            assert_eq!(root, PathBuf::from("/src/vke"));
            assert_eq!(config, Some(PathBuf::from("gen.toml")));
            assert!(fail_fast);
            assert!(dry_run);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parsing_scan() {
        let cli = Cli::parse_from(["gen-client", "scan", "--root", "repo"]);
        if let Commands::Scan { root, config } = cli.command {
            assert_eq!(root, PathBuf::from("repo"));
            assert!(config.is_none());
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["gen-client", "--verbose", "generate"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["gen-client", "scan", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["gen-client", "scan"]);
        assert_eq!(cli.format, "pretty");
    }

    #[test]
    fn test_cli_output_format_custom() {
        let cli = Cli::parse_from(["gen-client", "--format", "json", "generate"]);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_parsing_completions_zsh() {
        let cli = Cli::parse_from(["gen-client", "completions", "zsh"]);
        if let Commands::Completions { shell } = cli.command {
            assert_eq!(shell, Shell::Zsh);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["gen-client", "publish"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
