//! Common types used throughout json-to-ts
//!
//! Type aliases over `serde_json` and the input wrapper accepted by
//! [`convert`](crate::convert).

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type (keys keep insertion order)
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Input
// ============================================================================

/// Input to a conversion: raw JSON text or an already parsed value
#[derive(Debug, Clone, Copy)]
pub enum JsonInput<'a> {
    /// JSON text that still has to be parsed
    Text(&'a str),
    /// A parsed value, used as-is
    Value(&'a JsonValue),
}

impl JsonInput<'_> {
    /// Check if this input still needs parsing
    pub fn is_text(&self) -> bool {
        matches!(self, JsonInput::Text(_))
    }
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        JsonInput::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        JsonInput::Text(text.as_str())
    }
}

impl<'a> From<&'a JsonValue> for JsonInput<'a> {
    fn from(value: &'a JsonValue) -> Self {
        JsonInput::Value(value)
    }
}
