//! Error types for json-to-ts
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Inference itself never fails; errors come from parsing input text,
//! resolving CLI input, and reading or writing files.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for json-to-ts
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Invalid JSON: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("No input provided: pass a JSON file or a JSON string (see --help)")]
    MissingInput,

    #[error(
        "File not found: {} (current directory: {}){}",
        .path.display(),
        .cwd.display(),
        format_candidates(.candidates)
    )]
    FileNotFound {
        path: PathBuf,
        cwd: PathBuf,
        candidates: Vec<String>,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a file-not-found error with the files the user might have meant
    pub fn file_not_found(
        path: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
        candidates: Vec<String>,
    ) -> Self {
        Self::FileNotFound {
            path: path.into(),
            cwd: cwd.into(),
            candidates,
        }
    }
}

fn format_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        "; no .json files found there".to_string()
    } else {
        format!("; available .json files: {}", candidates.join(", "))
    }
}

/// Result type alias for json-to-ts
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
