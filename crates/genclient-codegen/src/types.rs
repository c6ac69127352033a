//! Types for client generation.
//!
//! Template render contexts and the per-run report returned by the
//! generator.
//!
//! # Examples
//!
//! ```
//! use genclient_codegen::{GeneratedClient, GenerationReport};
//! use std::path::PathBuf;
//!
//! let mut report = GenerationReport::new("example.com/vke");
//! report.generated.push(GeneratedClient {
//!     source: PathBuf::from("pkg/model/storage/svc/client.go"),
//!     output: PathBuf::from("pkg/client/storage/generated.storage.go"),
//!     service: "Storage".to_string(),
//!     function_count: 3,
//! });
//!
//! assert!(report.is_success());
//! assert_eq!(report.function_count(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Render context of the `client/base` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseContext<'a> {
    /// Tool name written into the generated-code header
    pub generator: &'a str,
    /// Go package of the generated file
    pub package: &'a str,
    /// Struct name of the generated client
    pub service: &'a str,
    /// Import path of the generic HTTP client package
    pub client_import: &'a str,
    /// Extra import lines, each already quoted
    pub package_imports: &'a [String],
}

/// Render context of the `client/function` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionContext<'a> {
    /// Receiver struct name
    pub service: &'a str,
    /// Method and action name
    pub action: &'a str,
    /// Declared type of the `r` result
    pub response_type: &'a str,
    /// Expression `r` is initialised with
    pub zero_response_expr: &'a str,
}

/// A client file written by a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedClient {
    /// Interface file the client was generated from
    pub source: PathBuf,
    /// Generated file
    pub output: PathBuf,
    /// Generated struct name
    pub service: String,
    /// Number of wrapper methods emitted
    pub function_count: usize,
}

/// An interface file that could not be turned into a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedClient {
    /// Interface file that failed
    pub source: PathBuf,
    /// Error description, including its causes
    pub error: String,
}

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Module name read from the manifest
    pub module: String,
    /// Clients written, in scan order
    pub generated: Vec<GeneratedClient>,
    /// Interface files skipped because of an error, in scan order
    pub failed: Vec<FailedClient>,
}

impl GenerationReport {
    /// Creates an empty report for `module`.
    #[must_use]
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            generated: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Returns `true` if no interface file failed.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of wrapper methods emitted across all clients.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.generated.iter().map(|c| c.function_count).sum()
    }
}

/// A complete client file rendered in memory.
///
/// Produced by dry runs; nothing is written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedClient {
    /// Interface file the client was rendered from
    pub source: PathBuf,
    /// Path the file would be written to
    pub output: PathBuf,
    /// Generated struct name
    pub service: String,
    /// Number of wrapper methods
    pub function_count: usize,
    /// Full file content
    pub content: String,
}

/// Summary of a dry run: every client rendered, nothing written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DryRunReport {
    /// Module name read from the manifest
    pub module: String,
    /// Clients rendered, in scan order
    pub rendered: Vec<RenderedClient>,
    /// Interface files that could not be rendered, in scan order
    pub failed: Vec<FailedClient>,
}

impl DryRunReport {
    /// Returns `true` if every interface file rendered.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
