//! # attrgen Schema
//!
//! Object schema model for the attrgen code generator.
//!
//! This crate provides:
//! - Descriptor types for schema objects and their properties
//! - Property kind enumeration with relationship support
//! - Naming helpers for generated identifiers
//! - Optional pre-flight schema validation
//!
//! The schema arrives fully populated from the caller's introspection layer;
//! this crate only defines its shape and consistency rules.

pub mod error;
pub mod names;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use names::{to_pascal_case, to_snake_case};
pub use types::{ObjectDescriptor, PropertyDescriptor, PropertyKind, Schema};
pub use validation::validate_schema;
