//! Scan command implementation.
//!
//! Lists the interface files a generate run would process, without reading
//! or writing any of them.

use super::common::{ensure_root, load_config};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use genclient_codegen::scan_clients;
use genclient_core::ClientInfo;
use genclient_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Result of the scan command.
#[derive(Debug, Serialize)]
pub struct ScanResult {
    /// Directory that was scanned
    pub scan_dir: PathBuf,
    /// Interface files found, in scan order
    pub clients: Vec<ClientInfo>,
}

/// Runs the scan command.
///
/// # Errors
///
/// Returns an error if the root or configuration is invalid or the scan
/// fails.
pub fn run(root: PathBuf, config: Option<PathBuf>, output_format: OutputFormat) -> Result<ExitCode> {
    ensure_root(&root)?;
    let config = load_config(config.as_deref())?;

    let clients = scan_clients(&root, &config)
        .with_context(|| format!("failed to scan {}", root.display()))?;
    info!("Scan found {} client file(s)", clients.len());

    let result = ScanResult {
        scan_dir: root.join(&config.scan_dir),
        clients,
    };
    println!("{}", format_output(&result, output_format)?);

    Ok(ExitCode::SUCCESS)
}
