//! Filesystem emission of generated attribute files.
//!
//! Drives generation for an entire schema: one file per object, written to a
//! destination directory. Files for objects no longer present in the schema
//! are left untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use attrgen_schema::{ObjectDescriptor, Schema};
use tracing::{debug, info};

use crate::error::CodegenError;
use crate::rust::AttributeFileGenerator;

/// Emits generated attribute files for a schema.
///
/// Emission is strictly sequential and not re-entrant: concurrent runs
/// against the same destination must be serialized by the caller.
pub struct Emitter {
    destination: PathBuf,
}

impl Emitter {
    /// Creates an emitter writing into the given destination directory.
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Returns the destination directory.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Returns the output path for one object.
    #[must_use]
    pub fn output_path(&self, object: &ObjectDescriptor) -> PathBuf {
        self.destination
            .join(format!("{}.generated.rs", object.name))
    }

    /// Generates and writes one file per object in the schema.
    ///
    /// Creates the destination directory (and intermediates) if missing.
    /// Each file is written atomically (temporary sibling plus rename) after
    /// a best-effort removal of any stale file at the same path. The first
    /// failing directory or write operation aborts the batch; files written
    /// earlier in the same run remain on disk. Stale files for objects
    /// removed from the schema are not cleaned up.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` on directory-creation or write failure.
    pub fn emit(&self, schema: &Schema) -> Result<(), CodegenError> {
        fs::create_dir_all(&self.destination)?;

        for object in schema.objects() {
            let body = AttributeFileGenerator::new(object).generate();
            let path = self.output_path(object);

            // Stale-file removal is best effort; the file may not exist yet.
            let _ = fs::remove_file(&path);

            write_atomic(&path, &body)?;
            debug!(object = %object.name, path = %path.display(), "wrote attribute file");
        }

        info!(
            objects = schema.len(),
            destination = %self.destination.display(),
            "attribute generation complete"
        );
        Ok(())
    }
}

/// Writes contents to a temporary sibling and renames it onto the final
/// path, so a crash mid-write never leaves a half-written file under the
/// final name.
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = path.with_extension("rs.tmp");
    fs::write(&tmp, contents)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}
