//! Input resolution for positional arguments
//!
//! An argument naming an existing file always wins over literal JSON text.

use crate::error::{Error, Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the JSON text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read the file at this path
    File(PathBuf),
    /// Use the argument itself as JSON text
    Literal(String),
}

impl InputSource {
    /// Load the JSON text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            InputSource::Literal(text) => Ok(text.clone()),
        }
    }
}

/// Pick the input among positional arguments
///
/// Relative paths are resolved against `cwd`. Order:
/// 1. the last argument that is an existing file
/// 2. the last argument that looks like JSON text
/// 3. the last argument, as a file that does not exist
pub fn resolve_input(args: &[String], cwd: &Path) -> Result<InputSource> {
    let Some(last) = args.last() else {
        return Err(Error::MissingInput);
    };

    if let Some(path) = args.iter().rev().map(|arg| cwd.join(arg)).find(|p| p.is_file()) {
        tracing::debug!(path = %path.display(), "reading JSON from file");
        return Ok(InputSource::File(path));
    }

    if let Some(text) = args.iter().rev().find(|arg| looks_like_json(arg)) {
        tracing::debug!(len = text.len(), "using literal JSON argument");
        return Ok(InputSource::Literal(text.clone()));
    }

    Err(Error::file_not_found(last, cwd, list_json_files(cwd)))
}

/// Check if an argument reads as JSON text rather than a path
pub fn looks_like_json(arg: &str) -> bool {
    let text = arg.trim();
    match text.chars().next() {
        Some('{' | '[' | '"' | '-') => true,
        Some(c) if c.is_ascii_digit() => true,
        _ => matches!(text, "true" | "false" | "null"),
    }
}

/// Names of the `.json` files in `dir`, sorted
pub fn list_json_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();

    names.sort();
    names
}
