//! Schema descriptor definitions.
//!
//! This module contains the data structures describing schema objects and
//! their properties. Descriptors are built by whatever layer introspects the
//! database model and are read-only for the duration of a generation run.

use std::collections::HashMap;

/// Complete schema handed to the generator.
///
/// Holds an ordered list of object descriptors plus a name lookup map that
/// is maintained as objects are added.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Object descriptors in declaration order.
    objects: Vec<ObjectDescriptor>,
    /// Object lookup map (name to index).
    object_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object descriptor to the schema.
    pub fn add_object(&mut self, object: ObjectDescriptor) {
        let name = object.name.clone();
        let index = self.objects.len();
        self.objects.push(object);
        self.object_map.insert(name, index);
    }

    /// Looks up an object by name.
    #[must_use]
    pub fn get_object(&self, name: &str) -> Option<&ObjectDescriptor> {
        self.object_map.get(name).map(|&idx| &self.objects[idx])
    }

    /// Returns true if an object with the given name exists.
    #[must_use]
    pub fn has_object(&self, name: &str) -> bool {
        self.object_map.contains_key(name)
    }

    /// Returns the objects in declaration order.
    #[must_use]
    pub fn objects(&self) -> &[ObjectDescriptor] {
        &self.objects
    }

    /// Returns true if the schema holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns the number of objects in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Rebuilds the name lookup map from the objects vector.
    pub fn build_object_map(&mut self) {
        self.object_map.clear();
        for (idx, object) in self.objects.iter().enumerate() {
            self.object_map.insert(object.name.clone(), idx);
        }
    }
}

/// Descriptor for one schema object (entity).
#[derive(Debug, Clone)]
pub struct ObjectDescriptor {
    /// Object name, unique within the schema.
    pub name: String,
    /// Properties in declaration order. The order is semantically relevant:
    /// generated accessors are emitted in this order.
    pub properties: Vec<PropertyDescriptor>,
    /// Name of the primary key property, if the object has one.
    pub primary_key: Option<String>,
}

impl ObjectDescriptor {
    /// Creates a new object descriptor with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            primary_key: None,
        }
    }

    /// Adds a property to the object.
    pub fn add_property(&mut self, property: PropertyDescriptor) {
        self.properties.push(property);
    }

    /// Sets the primary key property name, returning the descriptor.
    #[must_use]
    pub fn with_primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key = Some(name.into());
        self
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the primary key property, if the declared name resolves to a
    /// member property.
    #[must_use]
    pub fn primary_key_property(&self) -> Option<&PropertyDescriptor> {
        self.primary_key.as_deref().and_then(|pk| self.property(pk))
    }

    /// Returns true if the given property is this object's primary key.
    ///
    /// Matching is by name, not by identity: descriptors are plain values
    /// and may be freely copied.
    #[must_use]
    pub fn is_primary_key(&self, property: &PropertyDescriptor) -> bool {
        self.primary_key.as_deref() == Some(property.name.as_str())
    }
}

/// Descriptor for one property of a schema object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name, unique within the owning object.
    pub name: String,
    /// Property kind.
    pub kind: PropertyKind,
    /// Whether absent/null values are permitted.
    pub is_optional: bool,
    /// Target object name, present only for relationship kinds.
    pub related_object_name: Option<String>,
}

impl PropertyDescriptor {
    /// Creates a new required property descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_optional: false,
            related_object_name: None,
        }
    }

    /// Marks the property as optional (nullable), returning the descriptor.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Sets the relationship target object name, returning the descriptor.
    #[must_use]
    pub fn related_to(mut self, object: impl Into<String>) -> Self {
        self.related_object_name = Some(object.into());
        self
    }

    /// Returns the relationship target name, if present and non-empty.
    ///
    /// A relationship property with a missing or empty target is valid input;
    /// the type mapper substitutes a fallback type for it.
    #[must_use]
    pub fn related_target(&self) -> Option<&str> {
        self.related_object_name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Property kinds recognized by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Integer value.
    Int,
    /// Boolean value.
    Bool,
    /// Single-precision floating point value.
    Float,
    /// Double-precision floating point value.
    Double,
    /// Text value.
    String,
    /// Binary blob value.
    Data,
    /// Dynamically typed value.
    Any,
    /// Timestamp value.
    Date,
    /// Reference to a single related object.
    Object,
    /// Ordered collection of related objects.
    List,
    /// Inverse-relationship collection of related objects.
    LinkingObjects,
}

impl PropertyKind {
    /// Returns the stable schema name for this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Data => "data",
            Self::Any => "any",
            Self::Date => "date",
            Self::Object => "object",
            Self::List => "list",
            Self::LinkingObjects => "linkingObjects",
        }
    }

    /// Returns true if this kind refers to another object descriptor.
    #[must_use]
    pub const fn is_relationship(&self) -> bool {
        matches!(self, Self::Object | Self::List | Self::LinkingObjects)
    }
}
