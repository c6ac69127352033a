//! Per-repository generation pipeline.
//!
//! [`Generator`] resolves the module name once, scans for interface files,
//! and for each one extracts the interface, writes a fresh base file, and
//! appends the wrapper methods. The base file is rewritten on every run
//! before the single append, so running twice leaves identical output.
//!
//! # Examples
//!
//! ```no_run
//! use genclient_codegen::{FailurePolicy, Generator};
//! use genclient_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! let generator = Generator::new("/path/to/repo", &config)?;
//! let report = generator.run(FailurePolicy::Continue)?;
//!
//! for client in &report.generated {
//!     println!("{} -> {}", client.source.display(), client.output.display());
//! }
//! # Ok::<(), genclient_core::Error>(())
//! ```

use crate::emitter::ClientEmitter;
use crate::extractor::{ExtractError, check_package_name, extract_interface};
use crate::module::{import_path_for, resolve_module};
use crate::scanner::scan_clients;
use crate::types::{DryRunReport, FailedClient, GeneratedClient, GenerationReport, RenderedClient};
use crate::writer::append_functions;
use genclient_core::{ClientInfo, Error, FunctionPart, GeneratorConfig, Result, ServiceName};
use std::fs;
use std::path::{Path, PathBuf};

/// What to do when one interface file cannot be processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure in the report and move on to the next file.
    #[default]
    Continue,
    /// Stop the run and return the error.
    FailFast,
}

/// Everything needed to write one client, computed before any output.
#[derive(Debug)]
struct ClientPlan {
    service: ServiceName,
    package: String,
    imports: Vec<String>,
    functions: Vec<FunctionPart>,
    output: PathBuf,
}

/// Generates HTTP client wrappers for one repository.
#[derive(Debug)]
pub struct Generator<'a> {
    root: PathBuf,
    module: String,
    config: &'a GeneratorConfig,
    emitter: ClientEmitter<'a>,
}

impl<'a> Generator<'a> {
    /// Creates a generator for the repository at `root`.
    ///
    /// Validates `config` and resolves the module name from the manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for an invalid configuration,
    /// [`Error::Io`] if the manifest cannot be read, and
    /// [`Error::ModuleNotFound`] if it declares no module.
    pub fn new(root: impl Into<PathBuf>, config: &'a GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let root = root.into();
        let module = resolve_module(&root, &config.manifest)?;
        let emitter = ClientEmitter::new(config)?;

        Ok(Self {
            root,
            module,
            config,
            emitter,
        })
    }

    /// Repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Module name resolved from the manifest.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Lists the interface files this generator would process.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScanFailed`] if the scan directory cannot be walked.
    pub fn scan(&self) -> Result<Vec<ClientInfo>> {
        scan_clients(&self.root, self.config)
    }

    /// Generates a client for every interface file in the repository.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScanFailed`] if scanning fails. With
    /// [`FailurePolicy::FailFast`], also returns the first per-file error;
    /// with [`FailurePolicy::Continue`] those are recorded in the report.
    pub fn run(&self, policy: FailurePolicy) -> Result<GenerationReport> {
        let clients = self.scan()?;
        let (generated, failed) = self.process(&clients, policy, |info| self.generate(info))?;

        tracing::info!(
            "Generated {} client(s), {} failed",
            generated.len(),
            failed.len()
        );

        Ok(GenerationReport {
            module: self.module.clone(),
            generated,
            failed,
        })
    }

    /// Renders every client in memory without touching the output tree.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::run`].
    pub fn dry_run(&self, policy: FailurePolicy) -> Result<DryRunReport> {
        let clients = self.scan()?;
        let (rendered, failed) = self.process(&clients, policy, |info| self.render(info))?;

        Ok(DryRunReport {
            module: self.module.clone(),
            rendered,
            failed,
        })
    }

    /// Generates the client for one interface file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the interface file cannot be read or the
    /// output cannot be written, [`Error::ExtractionFailed`] if the file
    /// does not declare a usable `Client` interface, and
    /// [`Error::TemplateError`] if rendering fails.
    pub fn generate(&self, info: &ClientInfo) -> Result<GeneratedClient> {
        let plan = self.plan(info)?;

        self.emitter
            .emit_base_file(&plan.output, &plan.package, plan.service.as_str(), &plan.imports)?;
        let functions = self
            .emitter
            .join_functions(plan.service.as_str(), &plan.functions)?;
        append_functions(&plan.output, &functions)?;

        tracing::info!(
            "Generated {} ({} functions) from {}",
            plan.output.display(),
            plan.functions.len(),
            info.path.display()
        );

        Ok(GeneratedClient {
            source: info.path.clone(),
            output: plan.output,
            service: plan.service.into_inner(),
            function_count: plan.functions.len(),
        })
    }

    /// Renders the complete client file for one interface file in memory.
    ///
    /// The content is byte-identical to what [`Generator::generate`] writes.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate`], minus output I/O.
    pub fn render(&self, info: &ClientInfo) -> Result<RenderedClient> {
        let plan = self.plan(info)?;

        let mut content =
            self.emitter
                .render_base(&plan.package, plan.service.as_str(), &plan.imports)?;
        content.push_str(
            &self
                .emitter
                .join_functions(plan.service.as_str(), &plan.functions)?,
        );

        Ok(RenderedClient {
            source: info.path.clone(),
            output: plan.output,
            service: plan.service.into_inner(),
            function_count: plan.functions.len(),
            content,
        })
    }

    /// Path of the client generated for `info` with service `service`.
    #[must_use]
    pub fn output_path(&self, info: &ClientInfo, service: &ServiceName) -> PathBuf {
        self.root
            .join(&self.config.output_dir)
            .join(&info.group)
            .join(format!(
                "generated.{}.{}",
                service.to_file_stem(),
                self.config.file_extension
            ))
    }

    fn plan(&self, info: &ClientInfo) -> Result<ClientPlan> {
        let extraction_failed = |e: ExtractError| Error::ExtractionFailed {
            path: info.path.clone(),
            source: Box::new(e),
        };

        // The group names the package of the generated file.
        check_package_name(&info.group).map_err(extraction_failed)?;

        let content = fs::read_to_string(&info.path).map_err(|e| Error::io(&info.path, e))?;
        let extracted =
            extract_interface(&content, &self.config.import_marker).map_err(extraction_failed)?;

        let mut imports = extracted.imports;
        let types_import = format!(
            "\"{}\"",
            import_path_for(&self.root, &self.module, &info.path)?
        );
        if !imports.contains(&types_import) {
            imports.push(types_import);
        }

        let output = self.output_path(info, &extracted.service);

        Ok(ClientPlan {
            service: extracted.service,
            package: info.group.clone(),
            imports,
            functions: extracted.functions,
            output,
        })
    }

    fn process<T, F>(
        &self,
        clients: &[ClientInfo],
        policy: FailurePolicy,
        mut step: F,
    ) -> Result<(Vec<T>, Vec<FailedClient>)>
    where
        F: FnMut(&ClientInfo) -> Result<T>,
    {
        let mut done = Vec::with_capacity(clients.len());
        let mut failed = Vec::new();

        for info in clients {
            match step(info) {
                Ok(value) => done.push(value),
                Err(e) if policy == FailurePolicy::FailFast => return Err(e),
                Err(e) => {
                    let error = error_chain(&e);
                    tracing::warn!("Skipping {}: {}", info.path.display(), error);
                    failed.push(FailedClient {
                        source: info.path.clone(),
                        error,
                    });
                }
            }
        }

        Ok((done, failed))
    }
}

/// Joins an error and its sources into one line.
fn error_chain(error: &Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
