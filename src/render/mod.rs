//! Declaration rendering
//!
//! Turns a [`TypeTable`](crate::schema::TypeTable) into TypeScript source:
//! one `interface` (or `type` alias) per entry, in table order.

mod declarations;

pub use declarations::{
    is_valid_identifier, render, render_body, render_declaration, render_key, render_property,
};
