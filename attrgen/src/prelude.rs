//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use attrgen::prelude::*;
//! ```

// Schema types
pub use attrgen_schema::{ObjectDescriptor, PropertyDescriptor, PropertyKind, Schema};
pub use attrgen_schema::{SchemaError, validate_schema};
pub use attrgen_schema::{to_pascal_case, to_snake_case};

// Codegen types
pub use attrgen_codegen::{AttributeFileGenerator, CodegenError, Emitter, generate_attribute_files};
