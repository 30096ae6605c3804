//! CLI runner - executes a conversion

use crate::cli::commands::Cli;
use crate::cli::input::resolve_input;
use crate::config::ConvertOptions;
use crate::convert::Converter;
use crate::error::{Result, ResultExt};
use std::env;
use std::fs;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the conversion and write the result
    pub fn run(&self) -> Result<()> {
        let output = self.generate()?;

        match &self.cli.output {
            Some(path) => {
                fs::write(path, &output)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), bytes = output.len(), "wrote declarations");
                println!("Types written to: {}", path.display());
            }
            None => println!("{output}"),
        }

        Ok(())
    }

    /// Produce the declaration text without writing it anywhere
    pub fn generate(&self) -> Result<String> {
        let options = self.build_options()?;
        let cwd = env::current_dir()?;
        let text = resolve_input(&self.cli.inputs, &cwd)?.read()?;

        Converter::new(options).convert(text.as_str())
    }

    /// Build options: defaults, then the options file, then flags
    pub fn build_options(&self) -> Result<ConvertOptions> {
        let mut options = match &self.cli.config {
            Some(path) => ConvertOptions::from_file(path)?,
            None => ConvertOptions::default(),
        };

        if let Some(name) = &self.cli.root_name {
            options.root_name.clone_from(name);
        }
        if self.cli.use_types {
            options.use_interfaces = false;
        }
        if self.cli.no_export {
            options.export_types = false;
        }
        if self.cli.optional {
            options.optional_fields = true;
        }

        options.validate()?;
        tracing::debug!(?options, "resolved options");
        Ok(options)
    }
}
