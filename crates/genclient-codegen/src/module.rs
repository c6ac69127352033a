//! Module resolution from the repository's `go.mod`.
//!
//! The module name prefixes every import path the generator builds.

use genclient_core::{Error, Result};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Component, Path};
use std::sync::LazyLock;

static MODULE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*module\s+(\S+)").expect("valid regex"));

/// Reads `<root>/<manifest>` and returns the declared module name.
///
/// The first line of the form `module <name>` wins; lines that only
/// mention `module` inside a comment are ignored.
///
/// # Errors
///
/// Returns [`Error::Io`] if the manifest cannot be opened or read, and
/// [`Error::ModuleNotFound`] if no line declares a module.
///
/// # Examples
///
/// ```no_run
/// use genclient_codegen::resolve_module;
/// use std::path::Path;
///
/// let module = resolve_module(Path::new("/path/to/repo"), "go.mod")?;
/// println!("module: {module}");
/// # Ok::<(), genclient_core::Error>(())
/// ```
pub fn resolve_module(root: &Path, manifest: &str) -> Result<String> {
    let path = root.join(manifest);
    let file = File::open(&path).map_err(|e| Error::io(&path, e))?;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| Error::io(&path, e))?;
        if let Some(module) = parse_module_line(&line) {
            tracing::debug!("Resolved module {} from {}", module, path.display());
            return Ok(module);
        }
    }

    Err(Error::ModuleNotFound { manifest: path })
}

/// Returns the module name declared on `line`, if any.
///
/// # Examples
///
/// ```
/// use genclient_codegen::module::parse_module_line;
///
/// assert_eq!(parse_module_line("module example.com/myrepo").as_deref(), Some("example.com/myrepo"));
/// assert_eq!(parse_module_line("// module example.com/old"), None);
/// ```
#[must_use]
pub fn parse_module_line(line: &str) -> Option<String> {
    MODULE_REGEX
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_matches('"').trim().to_string())
        .filter(|module| !module.is_empty())
}

/// Builds the import path of the IDL types package for a client file.
///
/// Kitex places a service client at `<types package>/<service>/client.go`,
/// so the types package is the client file's directory minus its last
/// segment, relative to the repository root and prefixed by `module`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `client_path` is not under `root`.
///
/// # Examples
///
/// ```
/// use genclient_codegen::import_path_for;
/// use std::path::Path;
///
/// let path = import_path_for(
///     Path::new("/repo"),
///     "example.com/vke",
///     Path::new("/repo/pkg/model/storage/kitex_gen/storage/storageservice/client.go"),
/// )
/// .unwrap();
/// assert_eq!(path, "example.com/vke/pkg/model/storage/kitex_gen/storage");
/// ```
pub fn import_path_for(root: &Path, module: &str, client_path: &Path) -> Result<String> {
    let relative = client_path.strip_prefix(root).map_err(|_| {
        Error::InvalidArgument(format!(
            "{} is not inside {}",
            client_path.display(),
            root.display()
        ))
    })?;

    let dirs: Vec<String> = relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    let keep = dirs.len().saturating_sub(1);
    let mut path = module.trim_end_matches('/').to_string();
    for segment in &dirs[..keep] {
        path.push('/');
        path.push_str(segment);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn repo_with_manifest(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), content).unwrap();
        dir
    }

    #[test]
    fn test_resolve_simple_module() {
        let repo = repo_with_manifest("module example.com/myrepo\n\ngo 1.20\n");
        assert_eq!(
            resolve_module(repo.path(), "go.mod").unwrap(),
            "example.com/myrepo"
        );
    }

    #[test]
    fn test_resolve_with_blank_lines_and_comments() {
        let repo = repo_with_manifest(
            "\n\n// module example.com/not-this\n// Deprecated: use v2\n   module   example.com/myrepo   \n\nrequire (\n\tgithub.com/x/y v1.0.0\n)\n",
        );
        assert_eq!(
            resolve_module(repo.path(), "go.mod").unwrap(),
            "example.com/myrepo"
        );
    }

    #[test]
    fn test_resolve_quoted_module() {
        let repo = repo_with_manifest("module \"example.com/quoted\"\n");
        assert_eq!(
            resolve_module(repo.path(), "go.mod").unwrap(),
            "example.com/quoted"
        );
    }

    #[test]
    fn test_resolve_ignores_trailing_comment() {
        let repo = repo_with_manifest("module example.com/myrepo // main module\n");
        assert_eq!(
            resolve_module(repo.path(), "go.mod").unwrap(),
            "example.com/myrepo"
        );
    }

    #[test]
    fn test_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let err = resolve_module(dir.path(), "go.mod").unwrap_err();
        assert!(err.is_io_error());
    }

    #[test]
    fn test_manifest_without_module() {
        let repo = repo_with_manifest("go 1.20\n\nrequire github.com/x/y v1.0.0\n");
        let err = resolve_module(repo.path(), "go.mod").unwrap_err();
        assert!(err.is_module_not_found());
    }

    #[test]
    fn test_module_keyword_needs_name() {
        assert_eq!(parse_module_line("module"), None);
        assert_eq!(parse_module_line("modules example.com/x"), None);
    }

    #[test]
    fn test_import_path_drops_service_directory() {
        let path = import_path_for(
            Path::new("/repo"),
            "example.com/vke/",
            Path::new("/repo/pkg/model/api/kitex_gen/api/apiservice/client.go"),
        )
        .unwrap();
        assert_eq!(path, "example.com/vke/pkg/model/api/kitex_gen/api");
    }

    #[test]
    fn test_import_path_for_file_at_root() {
        let path =
            import_path_for(Path::new("/repo"), "example.com/vke", Path::new("/repo/client.go"))
                .unwrap();
        assert_eq!(path, "example.com/vke");
    }

    #[test]
    fn test_import_path_outside_root() {
        let err = import_path_for(
            Path::new("/repo"),
            "example.com/vke",
            Path::new("/elsewhere/client.go"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
