//! Schema validation utilities.
//!
//! Validation is a pre-flight check callers may run before generation.
//! Generation itself never requires a validated schema: the generator is
//! deliberately lenient (missing relationship targets fall back to a dynamic
//! type, an unresolved primary key simply drops the unique-identifiable
//! block).

use std::collections::HashSet;

use crate::error::SchemaError;
use crate::types::{ObjectDescriptor, Schema};

/// Validates a schema for consistency.
///
/// Checks object and property name uniqueness, non-empty names, and that any
/// declared primary key names a member property. Relationship targets are not
/// checked: a relationship property without a target is valid input by
/// contract.
///
/// # Errors
/// Returns the first `SchemaError` encountered.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for object in schema.objects() {
        if object.name.is_empty() {
            return Err(SchemaError::empty_name("object", ""));
        }
        if !seen.insert(object.name.as_str()) {
            return Err(SchemaError::duplicate_object(&object.name));
        }
        validate_object(object)?;
    }
    Ok(())
}

/// Validates a single object descriptor.
fn validate_object(object: &ObjectDescriptor) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for property in &object.properties {
        if property.name.is_empty() {
            return Err(SchemaError::empty_name("property", &object.name));
        }
        if !seen.insert(property.name.as_str()) {
            return Err(SchemaError::duplicate_property(&object.name, &property.name));
        }
    }

    if let Some(pk) = object.primary_key.as_deref()
        && object.property(pk).is_none()
    {
        return Err(SchemaError::unknown_primary_key(&object.name, pk));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PropertyDescriptor, PropertyKind};

    fn person() -> ObjectDescriptor {
        let mut object = ObjectDescriptor::new("Person").with_primary_key("name");
        object.add_property(PropertyDescriptor::new("name", PropertyKind::String));
        object.add_property(PropertyDescriptor::new("age", PropertyKind::Int));
        object
    }

    #[test]
    fn test_valid_schema() {
        let mut schema = Schema::new();
        schema.add_object(person());
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_duplicate_object() {
        let mut schema = Schema::new();
        schema.add_object(person());
        schema.add_object(person());

        let err = validate_schema(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateObject { .. }));
    }

    #[test]
    fn test_duplicate_property() {
        let mut object = ObjectDescriptor::new("Person");
        object.add_property(PropertyDescriptor::new("name", PropertyKind::String));
        object.add_property(PropertyDescriptor::new("name", PropertyKind::Int));

        let mut schema = Schema::new();
        schema.add_object(object);

        let err = validate_schema(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateProperty { .. }));
    }

    #[test]
    fn test_unknown_primary_key() {
        let mut object = ObjectDescriptor::new("Person").with_primary_key("id");
        object.add_property(PropertyDescriptor::new("name", PropertyKind::String));

        let mut schema = Schema::new();
        schema.add_object(object);

        let err = validate_schema(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownPrimaryKey { .. }));
    }

    #[test]
    fn test_empty_property_name() {
        let mut object = ObjectDescriptor::new("Person");
        object.add_property(PropertyDescriptor::new("", PropertyKind::String));

        let mut schema = Schema::new();
        schema.add_object(object);

        let err = validate_schema(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyName { .. }));
    }

    #[test]
    fn test_missing_relationship_target_is_not_an_error() {
        let mut object = ObjectDescriptor::new("Person");
        object.add_property(PropertyDescriptor::new("pet", PropertyKind::Object));

        let mut schema = Schema::new();
        schema.add_object(object);

        assert!(validate_schema(&schema).is_ok());
    }
}
