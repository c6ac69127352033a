//! Repository scanner.
//!
//! Finds every interface file under the configured scan directory and
//! records the group it belongs to. The group is the first directory under
//! the scan root, so `pkg/model/storage/kitex_gen/.../client.go` belongs to
//! the `storage` group.

use genclient_core::{ClientInfo, Error, GeneratorConfig, Result};
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Lists the interface files under `<root>/<scan_dir>`.
///
/// Entries are visited in file-name order, so repeated scans of the same
/// tree return the same list. Files named `target_file` that sit directly in
/// the scan root have no group and are skipped.
///
/// A missing scan directory yields an empty list.
///
/// # Errors
///
/// Returns [`Error::ScanFailed`] if the walk hits an entry it cannot read.
/// No partial result is returned in that case.
///
/// # Examples
///
/// ```no_run
/// use genclient_codegen::scan_clients;
/// use genclient_core::GeneratorConfig;
/// use std::path::Path;
///
/// let clients = scan_clients(Path::new("/path/to/repo"), &GeneratorConfig::default())?;
/// for client in &clients {
///     println!("{}: {}", client.group, client.path.display());
/// }
/// # Ok::<(), genclient_core::Error>(())
/// ```
pub fn scan_clients(root: &Path, config: &GeneratorConfig) -> Result<Vec<ClientInfo>> {
    let scan_root = root.join(&config.scan_dir);

    if !scan_root.is_dir() {
        tracing::warn!(
            "Scan directory {} does not exist, nothing to generate",
            scan_root.display()
        );
        return Ok(Vec::new());
    }

    let mut clients = Vec::new();

    for entry in WalkDir::new(&scan_root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::ScanFailed {
            path: scan_root.clone(),
            source: Box::new(e),
        })?;

        if !entry.file_type().is_file() || entry.file_name() != config.target_file.as_str() {
            continue;
        }

        let path = entry.path();
        match group_of(&scan_root, path) {
            Some(group) => {
                tracing::debug!("Found {} in group {}", path.display(), group);
                clients.push(ClientInfo::new(group, path));
            }
            None => {
                tracing::warn!(
                    "Skipping {}: not inside a group directory",
                    path.display()
                );
            }
        }
    }

    tracing::info!(
        "Found {} client file(s) under {}",
        clients.len(),
        scan_root.display()
    );

    Ok(clients)
}

/// First directory of `path` under `scan_root`, if the file is nested.
fn group_of(scan_root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(scan_root).ok()?;
    let mut components = relative.components();

    let first = match components.next()? {
        Component::Normal(segment) => segment.to_string_lossy().into_owned(),
        _ => return None,
    };

    // A bare filename has no directory to name the group after.
    components.next()?;

    Some(first)
}
