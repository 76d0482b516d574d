//! # attrgen
//!
//! Typed query-attribute source generator for object schemas.
//!
//! Given a schema of object descriptors (properties, primary keys,
//! relationships), attrgen emits one Rust source file per object declaring
//! typed attribute accessors for use with a fluent query-building runtime.
//!
//! ## Quick Start
//!
//! ```no_run
//! use attrgen::prelude::*;
//!
//! let mut person = ObjectDescriptor::new("Person").with_primary_key("name");
//! person.add_property(PropertyDescriptor::new("name", PropertyKind::String));
//! person.add_property(PropertyDescriptor::new("age", PropertyKind::Int));
//!
//! let mut schema = Schema::new();
//! schema.add_object(person);
//!
//! validate_schema(&schema)?;
//! generate_attribute_files(&schema, std::path::Path::new("generated"))?;
//! # Ok::<(), attrgen::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Object descriptor model and validation
//! - [`codegen`] - Attribute file generation and filesystem emission

pub mod prelude;

/// Object descriptor model and validation.
pub mod schema {
    pub use attrgen_schema::*;
}

/// Attribute file generation and filesystem emission.
pub mod codegen {
    pub use attrgen_codegen::*;
}
