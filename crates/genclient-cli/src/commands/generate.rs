//! Generate command implementation.
//!
//! Runs the full generation pipeline for one repository, or renders it in
//! memory with `--dry-run`.

use super::common::{ensure_root, load_config};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use genclient_codegen::{FailurePolicy, Generator};
use genclient_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing::info;

/// Runs the generate command.
///
/// # Returns
///
/// [`ExitCode::SUCCESS`] when every interface file produced a client, and
/// [`ExitCode::PARTIAL_FAILURE`] when some were skipped.
///
/// # Errors
///
/// Returns an error if the root or configuration is invalid, the module
/// cannot be resolved, the scan fails, or (with `fail_fast`) any interface
/// file fails.
pub fn run(
    root: PathBuf,
    config: Option<PathBuf>,
    fail_fast: bool,
    dry_run: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    ensure_root(&root)?;
    let config = load_config(config.as_deref())?;

    let policy = if fail_fast {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::Continue
    };

    info!("Generating clients under {}", root.display());
    let generator = Generator::new(&root, &config)
        .with_context(|| format!("failed to prepare generation for {}", root.display()))?;

    let (formatted, success) = if dry_run {
        let report = generator.dry_run(policy).context("dry run failed")?;
        (format_output(&report, output_format)?, report.is_success())
    } else {
        let report = generator.run(policy).context("generation failed")?;
        (format_output(&report, output_format)?, report.is_success())
    };

    println!("{formatted}");

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::PARTIAL_FAILURE
    })
}
