//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use genclient_core::{Error, GeneratorConfig};
use std::path::Path;

/// Loads the generator configuration.
///
/// Without a path the built-in defaults are used.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use genclient_cli::commands::common::load_config;
///
/// let config = load_config(None).unwrap();
/// assert_eq!(config.scan_dir, "pkg/model");
/// ```
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

/// Checks that `root` is an existing directory.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] otherwise.
pub fn ensure_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "repository root {} is not a directory",
            root.display()
        ))
        .into())
    }
}
