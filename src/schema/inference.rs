//! Type inference from JSON values

use super::types::{ObjectType, Property, TypeRef, TypeTable};
use crate::config::ConvertOptions;
use serde_json::{Map, Value};

/// Suffix appended to an array's type name to name its element type
const ITEM_SUFFIX: &str = "Item";

/// Remaining stack below which a deeper level runs on a fresh segment
const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each fresh stack segment
const STACK_GROWTH: usize = 2 * 1024 * 1024;

/// Type inferrer with configuration options
#[derive(Debug, Clone, Default)]
pub struct TypeInferrer {
    /// Mark every property optional
    optional_fields: bool,
}

impl TypeInferrer {
    /// Create a new type inferrer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferrer that follows the given options
    pub fn from_options(options: &ConvertOptions) -> Self {
        Self::new().with_optional_fields(options.optional_fields)
    }

    /// Enable/disable optional properties
    #[must_use]
    pub fn with_optional_fields(mut self, enabled: bool) -> Self {
        self.optional_fields = enabled;
        self
    }

    /// Infer the type of `value`, naming the top-level object `root_name`
    ///
    /// Returns the root reference and the table of every object type found.
    pub fn infer(&self, value: &Value, root_name: &str) -> (TypeRef, TypeTable) {
        let mut table = TypeTable::new();
        let root = self.infer_type(value, root_name, &mut table);
        tracing::debug!(root = %root, types = table.len(), "inferred types");
        (root, table)
    }

    /// Infer a type from a JSON value, registering object types in `table`
    fn infer_type(&self, value: &Value, type_name: &str, table: &mut TypeTable) -> TypeRef {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || match value {
            Value::Null => TypeRef::Null,
            Value::Bool(_) => TypeRef::Boolean,
            Value::Number(_) => TypeRef::Number,
            Value::String(_) => TypeRef::String,
            Value::Array(items) => self.infer_array_type(items, type_name, table),
            Value::Object(map) => self.infer_object_type(map, type_name, table),
        })
    }

    /// Infer an array type from its first element only
    fn infer_array_type(&self, items: &[Value], type_name: &str, table: &mut TypeTable) -> TypeRef {
        let Some(first) = items.first() else {
            return TypeRef::array_of(TypeRef::Any);
        };

        let item_name = format!("{type_name}{ITEM_SUFFIX}");
        TypeRef::array_of(self.infer_type(first, &item_name, table))
    }

    /// Infer an object type and register it under `type_name`
    fn infer_object_type(
        &self,
        map: &Map<String, Value>,
        type_name: &str,
        table: &mut TypeTable,
    ) -> TypeRef {
        let mut body = ObjectType::new();

        for (key, val) in map {
            let type_ref = self.infer_type(val, &capitalize(key), table);
            body.push(Property::new(key, type_ref).with_optional(self.optional_fields));
        }

        if table.insert(type_name, body).is_some() {
            tracing::warn!(
                type_name,
                "type name generated more than once; the last definition wins"
            );
        } else {
            tracing::debug!(type_name, "registered type");
        }

        TypeRef::named(type_name)
    }
}

/// Infer types from a JSON value (convenience function)
pub fn infer(value: &Value, root_name: &str, options: &ConvertOptions) -> (TypeRef, TypeTable) {
    TypeInferrer::from_options(options).infer(value, root_name)
}

/// Upper-case the first character of `s`
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
