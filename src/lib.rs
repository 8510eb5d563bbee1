//! # labeler
//!
//! Composes human-readable labels for source-code model elements: methods,
//! constructors, functions, fields, classes, compilation units and import
//! containers. A [`FormatFlags`] value picks what goes into the label and a
//! [`Separators`] value supplies the locale strings between the parts.
//!
//! ```
//! use labeler::{compose_label, Element, Field, FormatFlags, Separators, TypeRef};
//!
//! let field = Element::Field(Field {
//!     name: "bar".to_string(),
//!     declaring_type: Some(TypeRef::named("Foo")),
//!     ..Default::default()
//! });
//! let label = compose_label(&field, FormatFlags::ALL_POST_QUALIFIED, &Separators::default());
//! assert_eq!(label, "bar - Foo");
//! ```

pub mod config;
pub mod flags;
pub mod parser;
pub mod renderer;

pub use config::Separators;
pub use flags::FormatFlags;
pub use parser::*;
pub use renderer::*;
