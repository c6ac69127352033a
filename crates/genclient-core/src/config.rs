//! Generator configuration.
//!
//! Every setting has a default matching the standard repository layout, so
//! the configuration file is optional. When present it is TOML:
//!
//! ```toml
//! scan_dir = "pkg/model"
//! target_file = "client.go"
//! output_dir = "pkg/client"
//! manifest = "go.mod"
//! import_marker = "/kitex_gen/"
//! client_import = "github.com/volcengine/vkectl/pkg/client"
//! generator_name = "gen-client"
//! file_extension = "go"
//! ```
//!
//! # Examples
//!
//! ```
//! use genclient_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_toml_str("output_dir = \"internal/client\"").unwrap();
//! assert_eq!(config.output_dir, "internal/client");
//! assert_eq!(config.scan_dir, "pkg/model");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory under the repository root that is scanned for interface files.
    pub scan_dir: String,
    /// Exact filename of interface files.
    pub target_file: String,
    /// Directory under the repository root that receives generated clients.
    pub output_dir: String,
    /// Module manifest filename at the repository root.
    pub manifest: String,
    /// Substring marking an import as generated interface code.
    pub import_marker: String,
    /// Import path of the generic HTTP client package.
    pub client_import: String,
    /// Tool name written into the generated-code header.
    pub generator_name: String,
    /// Extension of generated files, without the dot.
    pub file_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scan_dir: "pkg/model".to_string(),
            target_file: "client.go".to_string(),
            output_dir: "pkg/client".to_string(),
            manifest: "go.mod".to_string(),
            import_marker: "/kitex_gen/".to_string(),
            client_import: "github.com/volcengine/vkectl/pkg/client".to_string(),
            generator_name: "gen-client".to_string(),
            file_extension: "go".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a TOML configuration.
    ///
    /// Missing keys take their default values; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the TOML is malformed or a value
    /// fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse configuration: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::ConfigError`] if its content is invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Validates field values.
    ///
    /// Directory settings must be relative paths that stay inside the
    /// repository root; filename settings must be single path components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] naming the first invalid field.
    ///
    /// # Examples
    ///
    /// ```
    /// use genclient_core::GeneratorConfig;
    ///
    /// let mut config = GeneratorConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.output_dir = "../outside".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("scan_dir", &self.scan_dir),
            ("target_file", &self.target_file),
            ("output_dir", &self.output_dir),
            ("manifest", &self.manifest),
            ("import_marker", &self.import_marker),
            ("client_import", &self.client_import),
            ("generator_name", &self.generator_name),
            ("file_extension", &self.file_extension),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::ConfigError {
                    message: format!("{field} cannot be empty"),
                });
            }
        }

        for (field, value) in [("scan_dir", &self.scan_dir), ("output_dir", &self.output_dir)] {
            let escapes = Path::new(value)
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
            if escapes {
                return Err(Error::ConfigError {
                    message: format!("{field} must be a relative path inside the repository: {value}"),
                });
            }
        }

        for (field, value) in [
            ("target_file", &self.target_file),
            ("manifest", &self.manifest),
        ] {
            if value.contains('/') || value.contains('\\') {
                return Err(Error::ConfigError {
                    message: format!("{field} must be a file name, not a path: {value}"),
                });
            }
        }

        if self.file_extension.starts_with('.') {
            return Err(Error::ConfigError {
                message: "file_extension must not start with '.'".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_file, "client.go");
        assert_eq!(config.import_marker, "/kitex_gen/");
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            client_import = "example.com/acme/httpclient"
            generator_name = "acme gen"
            "#,
        )
        .unwrap();
        assert_eq!(config.client_import, "example.com/acme/httpclient");
        assert_eq!(config.generator_name, "acme gen");
        assert_eq!(config.output_dir, "pkg/client");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GeneratorConfig::from_toml_str("scan_root = \"x\"").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GeneratorConfig::from_toml_str("scan_dir = ").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_field_rejected() {
        let err = GeneratorConfig::from_toml_str("import_marker = \"  \"").unwrap_err();
        assert!(err.to_string().contains("import_marker"));
    }

    #[test]
    fn test_absolute_scan_dir_rejected() {
        let err = GeneratorConfig::from_toml_str("scan_dir = \"/etc\"").unwrap_err();
        assert!(err.to_string().contains("scan_dir"));
    }

    #[test]
    fn test_parent_output_dir_rejected() {
        let err = GeneratorConfig::from_toml_str("output_dir = \"pkg/../../x\"").unwrap_err();
        assert!(err.to_string().contains("output_dir"));
    }

    #[test]
    fn test_target_file_with_separator_rejected() {
        let err = GeneratorConfig::from_toml_str("target_file = \"a/client.go\"").unwrap_err();
        assert!(err.to_string().contains("target_file"));
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let err = GeneratorConfig::from_toml_str("file_extension = \".go\"").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = \"gen/client\"").unwrap();

        let config = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_dir, "gen/client");
    }

    #[test]
    fn test_from_missing_file() {
        let err = GeneratorConfig::from_file(Path::new("/nonexistent/gen-client.toml")).unwrap_err();
        assert!(err.is_io_error());
    }
}
