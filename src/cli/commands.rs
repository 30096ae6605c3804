//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  json-to-ts data.json
  json-to-ts '{\"name\": \"Ana\", \"age\": 30}'
  json-to-ts --root-name User --output types.ts user.json";

/// Generate TypeScript interfaces or type aliases from example JSON
#[derive(Parser, Debug)]
#[command(name = "json-to-ts")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// JSON file to read, or literal JSON text
    #[arg(value_name = "FILE_OR_JSON", allow_negative_numbers = true)]
    pub inputs: Vec<String>,

    /// Name of the root interface/type (default: "RootObject")
    #[arg(long, value_name = "NAME")]
    pub root_name: Option<String>,

    /// Emit `type X = { ... };` aliases instead of interfaces
    #[arg(long)]
    pub use_types: bool,

    /// Do not prefix declarations with `export`
    #[arg(long)]
    pub no_export: bool,

    /// Make every field optional
    #[arg(long)]
    pub optional: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Options file (YAML or JSON) with rootName, useInterfaces, exportTypes, optionalFields
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
