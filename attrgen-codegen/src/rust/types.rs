//! Value type mapping.
//!
//! Maps each property kind to the type name used in generated accessor
//! signatures. The mapping is total: relationship properties without a
//! target substitute [`FALLBACK_TYPE`] instead of failing.

use attrgen_schema::{PropertyDescriptor, PropertyKind};

/// Type name substituted for relationship properties with no target, and for
/// dynamically typed properties.
pub const FALLBACK_TYPE: &str = "Value";

/// Returns the generated value type name for a property.
///
/// Primitive kinds map to fixed names; relationship kinds substitute the
/// target object name, falling back to [`FALLBACK_TYPE`] when it is absent
/// or empty.
#[must_use]
pub fn value_type(property: &PropertyDescriptor) -> String {
    match property.kind {
        PropertyKind::Int => "i64".to_string(),
        PropertyKind::Bool => "bool".to_string(),
        PropertyKind::Float => "f32".to_string(),
        PropertyKind::Double => "f64".to_string(),
        PropertyKind::String => "String".to_string(),
        PropertyKind::Data => "Vec<u8>".to_string(),
        PropertyKind::Any => FALLBACK_TYPE.to_string(),
        PropertyKind::Date => "Timestamp".to_string(),
        PropertyKind::Object => related_type(property).to_string(),
        PropertyKind::List => format!("List<{}>", related_type(property)),
        PropertyKind::LinkingObjects => format!("LinkingObjects<{}>", related_type(property)),
    }
}

/// Returns the relationship target name, or the fallback type.
fn related_type(property: &PropertyDescriptor) -> &str {
    property.related_target().unwrap_or(FALLBACK_TYPE)
}
