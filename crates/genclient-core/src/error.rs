//! Error types for the gen-client code generator.
//!
//! Every failure in the generation pipeline is reported through [`Error`],
//! so the CLI can decide per file whether to skip it or abort the run.
//!
//! # Examples
//!
//! ```
//! use genclient_core::{Error, Result};
//!
//! fn check_group(group: &str) -> Result<()> {
//!     if group.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "group cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_group("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gen-client.
///
/// Library crates in the workspace return this type; the binary wraps it
/// with `anyhow` context.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed.
    ///
    /// Raised when a file cannot be read, created, opened for append, or
    /// when a directory cannot be created.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the operation was performed on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal aborted.
    ///
    /// Raised by the repository scanner when the walk hits an entry it
    /// cannot access.
    #[error("Failed to scan {}", path.display())]
    ScanFailed {
        /// Scan root being walked
        path: PathBuf,
        /// Underlying traversal error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Interface extraction failed for a client file.
    ///
    /// The file did not have the shape the generator expects, so none of
    /// its output is produced.
    #[error("Failed to extract client interface from {}", path.display())]
    ExtractionFailed {
        /// Interface file that could not be processed
        path: PathBuf,
        /// Detailed extraction error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The module manifest contains no `module` directive.
    #[error("No module declaration found in {}", manifest.display())]
    ModuleNotFound {
        /// Manifest that was searched
        manifest: PathBuf,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// Underlying template engine error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    ///
    /// Raised when the configuration file cannot be parsed or contains
    /// invalid values.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an [`Error::Io`] for the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use genclient_core::Error;
    /// use std::io;
    ///
    /// let err = Error::io("go.mod", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_io_error());
    /// assert!(err.to_string().contains("go.mod"));
    /// ```
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is a filesystem error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a directory traversal error.
    #[must_use]
    pub const fn is_scan_error(&self) -> bool {
        matches!(self, Self::ScanFailed { .. })
    }

    /// Returns `true` if this is an interface extraction error.
    ///
    /// # Examples
    ///
    /// ```
    /// use genclient_core::Error;
    ///
    /// let err = Error::ExtractionFailed {
    ///     path: "pkg/model/storage/client.go".into(),
    ///     source: "no package declaration".into(),
    /// };
    /// assert!(err.is_extraction_error());
    /// ```
    #[must_use]
    pub const fn is_extraction_error(&self) -> bool {
        matches!(self, Self::ExtractionFailed { .. })
    }

    /// Returns `true` if the module manifest had no `module` line.
    #[must_use]
    pub const fn is_module_not_found(&self) -> bool {
        matches!(self, Self::ModuleNotFound { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use genclient_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "scan_dir cannot be empty".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if the error is caused by user input rather than by
    /// the environment.
    ///
    /// Input errors are malformed interface files, manifests, configuration
    /// and arguments. Filesystem and template failures are not.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::ExtractionFailed { .. }
                | Self::ModuleNotFound { .. }
                | Self::ConfigError { .. }
                | Self::InvalidArgument(_)
        )
    }
}

/// Result type alias for gen-client operations.
///
/// # Examples
///
/// ```
/// use genclient_core::{Error, Result};
///
/// fn parse_group(value: &str) -> Result<&str> {
///     if value.contains('/') {
///         return Err(Error::InvalidArgument(format!("bad group: {value}")));
///     }
///     Ok(value)
/// }
///
/// assert!(parse_group("storage").is_ok());
/// assert!(parse_group("a/b").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
