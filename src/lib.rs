//! # json-to-ts
//!
//! Infer TypeScript declarations from an example JSON value.
//!
//! ## Features
//!
//! - **Structural Inference**: One named type per JSON object, primitives for leaves
//! - **Arrays**: Typed from their first element (`OrdersItem[]`), `any[]` when empty
//! - **Interfaces or Aliases**: `interface X { ... }` or `type X = { ... };`
//! - **Options File**: Same option keys as the CLI flags, in YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use json_to_ts::{convert, ConvertOptions};
//!
//! let options = ConvertOptions::default().with_root_name("Root");
//! let output = convert(r#"{"user": {"id": 1}}"#, &options).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "export interface User {\n  id: number;\n}\n\nexport interface Root {\n  user: User;\n}"
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! JSON text ──parse──► Value ──schema::infer──► (TypeRef, TypeTable) ──render──► TypeScript
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Conversion options
pub mod config;

/// Type inference from JSON values
pub mod schema;

/// TypeScript declaration rendering
pub mod render;

/// Parse, infer and render in one call
pub mod convert;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ConvertOptions;
pub use convert::{convert, convert_json_to_ts, Converter};
pub use error::{Error, Result};
pub use render::render;
pub use schema::{infer, ObjectType, Property, TypeInferrer, TypeRef, TypeTable};
pub use types::{JsonInput, JsonObject, JsonValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
