//! Rust code generation modules.

pub mod attributes;
pub mod types;

pub use attributes::AttributeFileGenerator;
pub use types::{FALLBACK_TYPE, value_type};
