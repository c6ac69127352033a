//! Core types, configuration, and errors for gen-client.
//!
//! gen-client scans a repository for Kitex-generated `client.go` files and
//! emits HTTP client wrappers that forward every interface method to a
//! generic `CommonHandler` call. This crate holds what the scanner,
//! extractor, emitter, and CLI share:
//! - Domain types (`ClientInfo`, `FunctionPart`, `ServiceName`)
//! - Error hierarchy with contextual information
//! - Generator configuration
//! - CLI value types

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use types::{ClientInfo, FunctionPart, ServiceName};
