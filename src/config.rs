//! Conversion options
//!
//! `ConvertOptions` controls naming and rendering of the generated
//! declarations. Keys use camelCase (`rootName`, `useInterfaces`,
//! `exportTypes`, `optionalFields`) so an options file can be written in
//! YAML or JSON with the same names.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default name of the type generated for an object root
pub const DEFAULT_ROOT_NAME: &str = "RootObject";

/// Options for inference and rendering
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Name of the type generated for the top-level object
    pub root_name: String,

    /// Render `interface X { ... }` instead of `type X = { ... };`
    pub use_interfaces: bool,

    /// Prefix every declaration with `export`
    pub export_types: bool,

    /// Mark every property optional (`key?: T;`)
    pub optional_fields: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            use_interfaces: true,
            export_types: true,
            optional_fields: false,
        }
    }
}

impl ConvertOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root type name
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Choose between interface declarations and type aliases
    #[must_use]
    pub fn with_interfaces(mut self, enabled: bool) -> Self {
        self.use_interfaces = enabled;
        self
    }

    /// Enable/disable the `export` prefix
    #[must_use]
    pub fn with_export(mut self, enabled: bool) -> Self {
        self.export_types = enabled;
        self
    }

    /// Enable/disable optional properties
    #[must_use]
    pub fn with_optional_fields(mut self, enabled: bool) -> Self {
        self.optional_fields = enabled;
        self
    }

    /// Parse options from YAML or JSON text
    ///
    /// Missing keys keep their defaults.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let options: Self = serde_yaml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read options file {}: {e}",
                path.display()
            ))
        })?;
        Self::parse(&content)
    }

    /// Reject options that cannot produce a declaration
    pub fn validate(&self) -> Result<()> {
        if self.root_name.trim().is_empty() {
            return Err(Error::config("rootName must not be empty"));
        }
        Ok(())
    }
}
