//! HTTP client generation from Kitex client interfaces.
//!
//! Scans a repository for Kitex-generated `client.go` files, extracts the
//! methods of each `Client` interface, and renders Go wrapper clients that
//! forward every method to a generic `CommonHandler` call using Handlebars
//! templates.
//!
//! # Pipeline
//!
//! 1. [`resolve_module`] reads the module name from `go.mod`
//! 2. [`scan_clients`] lists interface files and their groups
//! 3. [`extract_interface`] pulls the service name, imports, and methods
//! 4. [`ClientEmitter`] renders the base file and the wrapper methods
//! 5. [`append_functions`] appends the methods to the base file
//!
//! [`Generator`] runs all of these for one repository.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod emitter;
pub mod extractor;
pub mod generator;
pub mod module;
pub mod scanner;
pub mod signature;
pub mod template_engine;
pub mod types;
pub mod writer;

pub use emitter::ClientEmitter;
pub use extractor::{ExtractError, ExtractedInterface, extract_interface, is_package_name};
pub use generator::{FailurePolicy, Generator};
pub use module::{import_path_for, resolve_module};
pub use scanner::scan_clients;
pub use types::{DryRunReport, FailedClient, GeneratedClient, GenerationReport, RenderedClient};
pub use writer::append_functions;
