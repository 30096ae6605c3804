//! Schema types

use indexmap::IndexMap;
use std::fmt;

/// An inline TypeScript type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Null,
    String,
    Number,
    Boolean,
    Any,
    /// Reference to an entry of the [`TypeTable`]
    Named(String),
    /// `T[]`
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Create an array-of-T reference
    pub fn array_of(item: TypeRef) -> Self {
        TypeRef::Array(Box::new(item))
    }

    /// Create a reference to a named type
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Element type if this is an array
    pub fn item_type(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(item) => Some(item),
            _ => None,
        }
    }

    /// Name of the referenced type, looking through arrays
    pub fn type_name(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => Some(name),
            TypeRef::Array(item) => item.type_name(),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Null => write!(f, "null"),
            TypeRef::String => write!(f, "string"),
            TypeRef::Number => write!(f, "number"),
            TypeRef::Boolean => write!(f, "boolean"),
            TypeRef::Any => write!(f, "any"),
            TypeRef::Named(name) => write!(f, "{name}"),
            TypeRef::Array(item) => write!(f, "{item}[]"),
        }
    }
}

/// One property of an object type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Key exactly as it appeared in the JSON object
    pub key: String,
    /// Inferred type of the value
    pub type_ref: TypeRef,
    /// Rendered with the `?` marker
    pub optional: bool,
}

impl Property {
    /// Create a required property
    pub fn new(key: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            key: key.into(),
            type_ref,
            optional: false,
        }
    }

    /// Set the optional marker
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// Record body of a named type: its properties in source key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectType {
    pub properties: Vec<Property>,
}

impl ObjectType {
    /// Create an empty object type
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property
    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Get a property by key
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key == key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Ordered table of named object types
///
/// Entries keep the position of their first insertion. Inserting a name
/// again replaces its body in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTable {
    types: IndexMap<String, ObjectType>,
}

impl TypeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a named type, returning the replaced body
    pub fn insert(&mut self, name: impl Into<String>, body: ObjectType) -> Option<ObjectType> {
        self.types.insert(name.into(), body)
    }

    /// Get a named type
    pub fn get(&self, name: &str) -> Option<&ObjectType> {
        self.types.get(name)
    }

    /// Check if a name is defined
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObjectType)> {
        self.types.iter().map(|(name, body)| (name.as_str(), body))
    }

    /// Type names in table order
    pub fn names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
