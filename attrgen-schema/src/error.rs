//! Error types for schema validation.

use thiserror::Error;

/// Error type for schema consistency checks.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two objects share the same name.
    #[error("duplicate object definition: '{name}'")]
    DuplicateObject {
        /// Object name.
        name: String,
    },

    /// Two properties of the same object share the same name.
    #[error("duplicate property '{property}' on object '{object}'")]
    DuplicateProperty {
        /// Owning object name.
        object: String,
        /// Property name.
        property: String,
    },

    /// The declared primary key names no property of the object.
    #[error("primary key '{property}' is not a property of object '{object}'")]
    UnknownPrimaryKey {
        /// Owning object name.
        object: String,
        /// Primary key name that failed to resolve.
        property: String,
    },

    /// An object or property has an empty name.
    #[error("empty {kind} name in object '{object}'")]
    EmptyName {
        /// What carries the empty name ("object" or "property").
        kind: String,
        /// Owning object name, or the empty string for the object itself.
        object: String,
    },
}

impl SchemaError {
    /// Creates a duplicate object error.
    pub fn duplicate_object(name: impl Into<String>) -> Self {
        Self::DuplicateObject { name: name.into() }
    }

    /// Creates a duplicate property error.
    pub fn duplicate_property(object: impl Into<String>, property: impl Into<String>) -> Self {
        Self::DuplicateProperty {
            object: object.into(),
            property: property.into(),
        }
    }

    /// Creates an unknown primary key error.
    pub fn unknown_primary_key(object: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownPrimaryKey {
            object: object.into(),
            property: property.into(),
        }
    }

    /// Creates an empty name error.
    pub fn empty_name(kind: impl Into<String>, object: impl Into<String>) -> Self {
        Self::EmptyName {
            kind: kind.into(),
            object: object.into(),
        }
    }
}
