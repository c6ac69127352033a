//! gen-client CLI library.
//!
//! Exposes the argument definitions, commands, and formatters of the
//! `gen-client` binary so they can be tested.

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;

pub use cli::{Cli, Commands};
