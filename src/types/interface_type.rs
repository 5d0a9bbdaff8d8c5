use crate::types::FieldDefinition;
use indexmap::IndexMap;

/// Represents an interface type defined within some
/// [`Schema`](crate::schema::Schema).
///
/// For validation and response-loading purposes an interface is structurally
/// identical to an [`ObjectType`](crate::types::ObjectType): both are
/// field-bearing types that own a field registry.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, FieldDefinition>,
    pub(super) name: String,
}
impl InterfaceType {
    /// Helper function that just delegates to
    /// [`InterfaceTypeBuilder::new()`](crate::types::InterfaceTypeBuilder::new).
    pub fn builder(
        name: impl Into<String>,
    ) -> crate::types::InterfaceTypeBuilder {
        crate::types::InterfaceTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Look up a field definition by exact, case-sensitive name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
