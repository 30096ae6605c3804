//! JSON to TypeScript conversion
//!
//! Ties parsing, inference and rendering together.

use crate::config::ConvertOptions;
use crate::error::Result;
use crate::render::render;
use crate::schema::{TypeInferrer, TypeRef, TypeTable};
use crate::types::{JsonInput, JsonValue};
use serde::Deserialize;

/// Converts JSON samples into TypeScript declarations
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Options used by this converter
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Infer the root type and type table of a parsed value
    pub fn infer(&self, value: &JsonValue) -> (TypeRef, TypeTable) {
        TypeInferrer::from_options(&self.options).infer(value, &self.options.root_name)
    }

    /// Convert JSON text or a parsed value into declaration text
    ///
    /// Fails only when text input is not well-formed JSON.
    pub fn convert<'a>(&self, input: impl Into<JsonInput<'a>>) -> Result<String> {
        let input = input.into();
        tracing::debug!(parse = input.is_text(), "converting JSON input");

        let (_, table) = match input {
            JsonInput::Text(text) => {
                let value = parse_json(text)?;
                self.infer(&value)
            }
            JsonInput::Value(value) => self.infer(value),
        };

        Ok(render(&table, &self.options))
    }
}

/// Parse JSON text without a nesting limit
///
/// Nested values are deserialized on a growable stack, so depth is bounded
/// by memory only.
pub fn parse_json(text: &str) -> Result<JsonValue> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = JsonValue::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Convert JSON text or a parsed value with the given options
pub fn convert<'a>(input: impl Into<JsonInput<'a>>, options: &ConvertOptions) -> Result<String> {
    Converter::new(options.clone()).convert(input)
}

/// Convert JSON to TypeScript declarations (programmatic entry point)
pub fn convert_json_to_ts<'a>(
    json: impl Into<JsonInput<'a>>,
    options: &ConvertOptions,
) -> Result<String> {
    convert(json, options)
}
