//! Type inference module
//!
//! Walks an example JSON value depth-first and builds a table of named
//! object types.
//!
//! # Rules
//!
//! - **Primitives**: strings, numbers, booleans and `null` map to their
//!   TypeScript primitive
//! - **Objects**: each object becomes a named type; nested objects are named
//!   after their key, capitalized (`address` → `Address`)
//! - **Arrays**: typed from the first element only, named `<Parent>Item`;
//!   empty arrays become `any[]`
//! - **Name collisions**: the last object generated under a name replaces the
//!   earlier one

mod inference;
mod types;

pub use inference::{capitalize, infer, TypeInferrer};
pub use types::{ObjectType, Property, TypeRef, TypeTable};
