//! Client file emission.
//!
//! [`ClientEmitter`] renders the two pieces of a generated client: the base
//! file (header, package clause, imports, struct, and constructor) and the
//! wrapper methods, one per extracted [`FunctionPart`].
//!
//! # Examples
//!
//! ```
//! use genclient_codegen::ClientEmitter;
//! use genclient_core::{FunctionPart, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let emitter = ClientEmitter::new(&config).unwrap();
//!
//! let base = emitter.render_base("storage", "Storage", &[]).unwrap();
//! assert!(base.contains("type Storage struct"));
//!
//! let parts = vec![FunctionPart {
//!     action: "ListBuckets".to_string(),
//!     request_type: "*storage.ListBucketsRequest".to_string(),
//!     response_type: "*storage.ListBucketsResponse".to_string(),
//!     zero_response_expr: "&storage.ListBucketsResponse{}".to_string(),
//! }];
//! let functions = emitter.join_functions("Storage", &parts).unwrap();
//! assert!(functions.contains("func (p *Storage) ListBuckets("));
//! ```

use crate::template_engine::{BASE_TEMPLATE, FUNCTION_TEMPLATE, TemplateEngine};
use crate::types::{BaseContext, FunctionContext};
use genclient_core::{Error, FunctionPart, GeneratorConfig, Result};
use std::fs;
use std::path::Path;

/// Renders and writes generated client code.
#[derive(Debug)]
pub struct ClientEmitter<'a> {
    engine: TemplateEngine<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> ClientEmitter<'a> {
    /// Creates an emitter using the header name and client import from
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the built-in templates fail to
    /// register.
    pub fn new(config: &'a GeneratorConfig) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            config,
        })
    }

    /// Renders the base file content.
    ///
    /// `imports` are emitted verbatim after the generic client import, so
    /// each entry must already be a quoted Go import path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if rendering fails.
    pub fn render_base(&self, package: &str, service: &str, imports: &[String]) -> Result<String> {
        let context = BaseContext {
            generator: &self.config.generator_name,
            package,
            service,
            client_import: &self.config.client_import,
            package_imports: imports,
        };

        self.engine.render(BASE_TEMPLATE, &context)
    }

    /// Renders the base file and writes it to `path`.
    ///
    /// Parent directories are created as needed. An existing file is
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if rendering fails and
    /// [`Error::Io`] if the directory or file cannot be written.
    pub fn emit_base_file(
        &self,
        path: &Path,
        package: &str,
        service: &str,
        imports: &[String],
    ) -> Result<()> {
        let content = self.render_base(package, service, imports)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(path, &content).map_err(|e| Error::io(path, e))?;

        tracing::debug!("Wrote base file {} ({} bytes)", path.display(), content.len());
        Ok(())
    }

    /// Renders one wrapper method per part and concatenates them in order.
    ///
    /// An empty slice yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if rendering fails.
    pub fn join_functions(&self, service: &str, parts: &[FunctionPart]) -> Result<String> {
        let mut joined = String::new();

        for part in parts {
            let context = FunctionContext {
                service,
                action: &part.action,
                response_type: &part.response_type,
                zero_response_expr: &part.zero_response_expr,
            };
            joined.push_str(&self.engine.render(FUNCTION_TEMPLATE, &context)?);
        }

        Ok(joined)
    }
}
