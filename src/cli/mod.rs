//! CLI module
//!
//! Command-line interface around the converter.
//!
//! # Input
//!
//! Positional arguments are JSON files or literal JSON text. An existing
//! file wins over literal text.

mod commands;
mod input;
mod logging;
mod runner;

pub use commands::Cli;
pub use input::{list_json_files, looks_like_json, resolve_input, InputSource};
pub use logging::log_directives;
pub use runner::Runner;

#[cfg(test)]
mod tests;
