//! Attribute file body generation.
//!
//! Produces the complete text of one generated source file for one object
//! descriptor: a header comment, a fixed import block, a static accessor
//! block, a chained-accessor trait block, and (when the object has a primary
//! key) a unique-identifiable block. Output is byte-identical across runs
//! for identical input.

use attrgen_schema::{ObjectDescriptor, PropertyDescriptor, to_pascal_case, to_snake_case};

use crate::rust::types::value_type;

/// Fixed import block emitted into every generated file.
const IMPORTS: &str = "use fluent_query::chain::AttributeChain;\n\
                       use fluent_query::{Attribute, LinkingObjects, List, NullableAttribute, Timestamp, UniqueIdentifiable, Value};";

/// Annotation appended to the accessor line of the primary key property.
const PRIMARY_KEY_MARK: &str = " // primary key";

/// Generator for one object's attribute file.
pub struct AttributeFileGenerator<'a> {
    object: &'a ObjectDescriptor,
}

impl<'a> AttributeFileGenerator<'a> {
    /// Creates a new generator for the given object descriptor.
    #[must_use]
    pub fn new(object: &'a ObjectDescriptor) -> Self {
        Self { object }
    }

    /// Returns the file name the generated body is intended for.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.generated.rs", self.object.name)
    }

    /// Generates the complete file body.
    ///
    /// The parts are separated by exactly one blank line and the body ends
    /// with a single trailing newline.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut parts = vec![
            self.header(),
            IMPORTS.to_string(),
            self.static_attributes(),
            self.chained_attributes(),
        ];

        if let Some(unique_identifiable) = self.unique_identifiable() {
            parts.push(unique_identifiable);
        }

        let mut output = parts.join("\n\n");
        output.push('\n');
        output
    }

    /// Generates the generated-code warning header.
    fn header(&self) -> String {
        format!(
            "//\n\
             //  {}\n\
             //\n\
             //  This code was generated by the attrgen code generator tool.\n\
             //\n\
             //  Changes to this file may cause incorrect behavior and will be lost if\n\
             //  the code is regenerated.\n\
             //",
            self.file_name()
        )
    }

    /// Generates the static accessor block.
    ///
    /// One associated function per property, in declaration order, each
    /// constructing an attribute from the property's schema name.
    fn static_attributes(&self) -> String {
        let mut lines = vec![
            format!("// ---- {}: query attributes ----", self.object.name),
            String::new(),
            format!("impl {} {{", self.object.name),
        ];

        for property in &self.object.properties {
            lines.push(self.static_attribute(property));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }

    /// Generates one static accessor line.
    fn static_attribute(&self, property: &PropertyDescriptor) -> String {
        let attribute = attribute_type(property);
        let mut line = format!(
            "    pub fn {}() -> {}<{}> {{ {}::new(\"{}\") }}",
            to_snake_case(&property.name),
            attribute,
            value_type(property),
            attribute,
            property.name,
        );
        if self.object.is_primary_key(property) {
            line.push_str(PRIMARY_KEY_MARK);
        }
        line
    }

    /// Generates the chained accessor block.
    ///
    /// A trait constrained to attribute chains targeting this object, with
    /// one default method per property, plus the blanket implementation.
    fn chained_attributes(&self) -> String {
        let trait_name = format!("{}Attributes", to_pascal_case(&self.object.name));
        let mut lines = vec![
            format!("// ---- {}: chained attribute accessors ----", self.object.name),
            String::new(),
            format!(
                "pub trait {}: AttributeChain<Target = {}> + Sized {{",
                trait_name, self.object.name
            ),
        ];

        for property in &self.object.properties {
            lines.push(self.chained_attribute(property));
        }

        lines.push("}".to_string());
        lines.push(String::new());
        lines.push(format!(
            "impl<T> {} for T where T: AttributeChain<Target = {}> {{}}",
            trait_name, self.object.name
        ));
        lines.join("\n")
    }

    /// Generates one chained accessor line.
    fn chained_attribute(&self, property: &PropertyDescriptor) -> String {
        let attribute = attribute_type(property);
        let mut line = format!(
            "    fn {}(&self) -> {}<{}> {{ {}::chained(\"{}\", self) }}",
            to_snake_case(&property.name),
            attribute,
            value_type(property),
            attribute,
            property.name,
        );
        if self.object.is_primary_key(property) {
            line.push_str(PRIMARY_KEY_MARK);
        }
        line
    }

    /// Generates the unique-identifiable block, if the object's primary key
    /// resolves to a member property.
    fn unique_identifiable(&self) -> Option<String> {
        let primary_key = self.object.primary_key_property()?;

        Some(format!(
            "// ---- {}: unique identifiable ----\n\
             \n\
             impl UniqueIdentifiable for {} {{\n\
             \x20   type Id = {};\n\
             }}",
            self.object.name,
            self.object.name,
            value_type(primary_key),
        ))
    }
}

/// Returns the attribute wrapper name for a property.
fn attribute_type(property: &PropertyDescriptor) -> &'static str {
    if property.is_optional {
        "NullableAttribute"
    } else {
        "Attribute"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrgen_schema::PropertyKind;

    fn person() -> ObjectDescriptor {
        let mut object = ObjectDescriptor::new("Person").with_primary_key("name");
        object.add_property(PropertyDescriptor::new("name", PropertyKind::String));
        object.add_property(PropertyDescriptor::new("age", PropertyKind::Int));
        object.add_property(
            PropertyDescriptor::new("pet", PropertyKind::Object)
                .related_to("Dog")
                .optional(),
        );
        object
    }

    #[test]
    fn test_header_names_the_file() {
        let object = person();
        let output = AttributeFileGenerator::new(&object).generate();

        assert!(output.starts_with("//\n//  Person.generated.rs\n//\n"));
        assert!(output.contains("will be lost if"));
    }

    #[test]
    fn test_static_accessors() {
        let object = person();
        let output = AttributeFileGenerator::new(&object).generate();

        assert!(output.contains(
            "    pub fn name() -> Attribute<String> { Attribute::new(\"name\") } // primary key"
        ));
        assert!(output.contains("    pub fn age() -> Attribute<i64> { Attribute::new(\"age\") }"));
        assert!(output.contains(
            "    pub fn pet() -> NullableAttribute<Dog> { NullableAttribute::new(\"pet\") }"
        ));
    }

    #[test]
    fn test_chained_accessors() {
        let object = person();
        let output = AttributeFileGenerator::new(&object).generate();

        assert!(output.contains("pub trait PersonAttributes: AttributeChain<Target = Person> + Sized {"));
        assert!(output.contains(
            "    fn name(&self) -> Attribute<String> { Attribute::chained(\"name\", self) } // primary key"
        ));
        assert!(output.contains(
            "    fn pet(&self) -> NullableAttribute<Dog> { NullableAttribute::chained(\"pet\", self) }"
        ));
        assert!(output.contains("impl<T> PersonAttributes for T where T: AttributeChain<Target = Person> {}"));
    }

    #[test]
    fn test_unique_identifiable_block() {
        let object = person();
        let output = AttributeFileGenerator::new(&object).generate();

        assert!(output.contains("impl UniqueIdentifiable for Person {"));
        assert!(output.contains("    type Id = String;"));
    }

    #[test]
    fn test_no_primary_key_no_unique_identifiable() {
        let mut object = ObjectDescriptor::new("Note");
        object.add_property(PropertyDescriptor::new("text", PropertyKind::String));
        let output = AttributeFileGenerator::new(&object).generate();

        assert!(!output.contains("impl UniqueIdentifiable"));
        assert!(!output.contains("// primary key"));
    }

    #[test]
    fn test_unresolved_primary_key_drops_block_and_annotation() {
        let mut object = ObjectDescriptor::new("Note").with_primary_key("id");
        object.add_property(PropertyDescriptor::new("text", PropertyKind::String));
        let output = AttributeFileGenerator::new(&object).generate();

        assert!(!output.contains("impl UniqueIdentifiable"));
        assert!(!output.contains("// primary key"));
    }

    #[test]
    fn test_exactly_one_annotation_per_block() {
        let object = person();
        let output = AttributeFileGenerator::new(&object).generate();

        assert_eq!(output.matches(" // primary key").count(), 2);
        for line in output.lines().filter(|l| l.ends_with("// primary key")) {
            assert!(line.contains("name"));
        }
    }

    #[test]
    fn test_properties_in_declaration_order() {
        let object = person();
        let output = AttributeFileGenerator::new(&object).generate();

        let name_pos = output.find("pub fn name()").unwrap();
        let age_pos = output.find("pub fn age()").unwrap();
        let pet_pos = output.find("pub fn pet()").unwrap();
        assert!(name_pos < age_pos && age_pos < pet_pos);

        let chained_name = output.find("fn name(&self)").unwrap();
        let chained_age = output.find("fn age(&self)").unwrap();
        let chained_pet = output.find("fn pet(&self)").unwrap();
        assert!(chained_name < chained_age && chained_age < chained_pet);
    }

    #[test]
    fn test_camel_case_property_names() {
        let mut object = ObjectDescriptor::new("Event");
        object.add_property(PropertyDescriptor::new("createdAt", PropertyKind::Date));
        let output = AttributeFileGenerator::new(&object).generate();

        // Accessor name is snake_case; the key keeps the schema spelling.
        assert!(output.contains(
            "    pub fn created_at() -> Attribute<Timestamp> { Attribute::new(\"createdAt\") }"
        ));
    }

    #[test]
    fn test_relationship_fallback_in_output() {
        let mut object = ObjectDescriptor::new("Person");
        object.add_property(PropertyDescriptor::new("pets", PropertyKind::List));
        let output = AttributeFileGenerator::new(&object).generate();

        assert!(output.contains("Attribute<List<Value>>"));
    }

    #[test]
    fn test_single_blank_line_separation() {
        let object = person();
        let output = AttributeFileGenerator::new(&object).generate();

        assert!(!output.contains("\n\n\n"));
        assert!(output.ends_with("}\n"));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn test_deterministic_output() {
        let object = person();
        let first = AttributeFileGenerator::new(&object).generate();
        let second = AttributeFileGenerator::new(&object).generate();

        assert_eq!(first, second);
    }
}
