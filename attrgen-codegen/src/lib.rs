//! # attrgen Codegen
//!
//! Query-attribute source file generation from an object schema model.
//!
//! This crate provides:
//! - Value type mapping from property kinds to generated type names
//! - Per-object attribute file body generation
//! - Filesystem emission with atomic writes
//!
//! Generation is purely transformational: for a fixed schema the emitted
//! files are byte-identical across runs.

pub mod emitter;
pub mod error;
pub mod rust;

pub use emitter::Emitter;
pub use error::CodegenError;
pub use rust::AttributeFileGenerator;

use std::path::Path;

use attrgen_schema::Schema;

/// Generates one attribute file per schema object into a destination
/// directory.
///
/// # Arguments
/// * `schema` - Fully populated schema model
/// * `destination` - Directory to write `<Name>.generated.rs` files into
///
/// # Errors
/// Returns `CodegenError::Io` if the destination cannot be created or a file
/// write fails; the batch aborts at the first failure and earlier files
/// remain on disk.
pub fn generate_attribute_files(schema: &Schema, destination: &Path) -> Result<(), CodegenError> {
    Emitter::new(destination).emit(schema)
}
