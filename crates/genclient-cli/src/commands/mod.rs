//! Command implementations for gen-client.
//!
//! Each command module runs one subcommand and prints its result in the
//! requested output format.

pub mod common;
pub mod completions;
pub mod generate;
pub mod scan;
