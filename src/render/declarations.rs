//! TypeScript declaration rendering

use crate::config::ConvertOptions;
use crate::schema::{ObjectType, Property, TypeTable};
use regex::Regex;
use std::sync::LazyLock;

/// Keys that can be written without quotes
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Indentation of properties inside a body
const INDENT: &str = "  ";

/// Render every type in the table, in table order, separated by blank lines
pub fn render(table: &TypeTable, options: &ConvertOptions) -> String {
    let declarations: Vec<String> = table
        .iter()
        .map(|(name, body)| render_declaration(name, body, options))
        .collect();

    declarations.join("\n\n").trim().to_string()
}

/// Render a single named declaration
///
/// `interface Name {...}` when interfaces are enabled, otherwise
/// `type Name = {...};`.
pub fn render_declaration(name: &str, body: &ObjectType, options: &ConvertOptions) -> String {
    let export = if options.export_types { "export " } else { "" };
    let body = render_body(body);

    if options.use_interfaces {
        format!("{export}interface {name} {body}")
    } else {
        format!("{export}type {name} = {body};")
    }
}

/// Render an object body, one property per line
pub fn render_body(body: &ObjectType) -> String {
    let lines: Vec<String> = body.properties.iter().map(render_property).collect();
    format!("{{\n{}\n}}", lines.join("\n"))
}

/// Render one property signature: `  key?: Type;`
pub fn render_property(property: &Property) -> String {
    let marker = if property.optional { "?" } else { "" };
    format!(
        "{INDENT}{}{marker}: {};",
        render_key(&property.key),
        property.type_ref
    )
}

/// Render a key bare if it is an identifier, quoted otherwise
pub fn render_key(key: &str) -> String {
    if is_valid_identifier(key) {
        key.to_string()
    } else {
        // JSON string literals are valid TypeScript string literals
        serde_json::to_string(key).unwrap_or_else(|_| format!("\"{key}\""))
    }
}

/// Check if a key is a bare identifier
pub fn is_valid_identifier(key: &str) -> bool {
    IDENTIFIER_REGEX.is_match(key)
}
